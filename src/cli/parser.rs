use clap::{Parser, Subcommand};

/// Command-line interface definition for plancal
/// Local-first shared calendar CLI backed by SQLite
#[derive(Parser)]
#[command(
    name = "plancal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local-first shared calendar: add events, inspect days and weeks, manage group members",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Add an event to the calendar
    Add {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Event title
        title: String,

        /// Start time (HH:MM, 24-hour)
        #[arg(long = "start", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM, 24-hour)
        #[arg(long = "end", help = "End time (HH:MM)")]
        end: Option<String>,

        /// Owning member id (defaults to me_id from the configuration)
        #[arg(long = "user", help = "Owning member id")]
        user: Option<String>,
    },

    /// Show the events and occupants of one day
    Day {
        /// Date to show (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Show the week containing a date as seven day buckets
    Week {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long = "from", help = "Reference date inside the week to show")]
        from: Option<String>,
    },

    /// Show the rolling upcoming-events preview
    Upcoming {
        /// Window size in days (defaults to upcoming_days from the configuration)
        #[arg(long = "days", help = "Window size in days")]
        days: Option<u32>,

        /// Maximum number of rows (defaults to upcoming_limit from the configuration)
        #[arg(long = "limit", help = "Maximum number of rows")]
        limit: Option<usize>,
    },

    /// List the effective members of a group
    Members {
        /// Group id (defaults to active_group from the configuration)
        #[arg(long = "group", help = "Group id")]
        group: Option<String>,
    },

    /// Locally add a member to a group (cancels a prior local removal)
    MemberAdd {
        /// Username of the member to add
        username: String,

        /// Display name
        #[arg(long = "name", help = "Full display name")]
        name: Option<String>,

        /// Marker color (e.g. "#FF3B30")
        #[arg(long = "color", help = "Marker color")]
        color: Option<String>,

        /// Group id (defaults to active_group from the configuration)
        #[arg(long = "group", help = "Group id")]
        group: Option<String>,
    },

    /// Locally remove a member from a group (cancels a prior local add)
    MemberRemove {
        /// Username of the member to remove
        username: String,

        /// Group id (defaults to active_group from the configuration)
        #[arg(long = "group", help = "Group id")]
        group: Option<String>,
    },

    /// List your groups on the remote service
    Groups,

    /// Rename a group on the remote service (owner only, enforced server-side)
    Rename {
        /// New group name
        name: String,

        /// Group id (defaults to active_group from the configuration)
        #[arg(long = "group", help = "Group id")]
        group: Option<String>,
    },

    /// Show or set your marker color (applied locally, then pushed best-effort)
    Color {
        /// Color value (e.g. "#c9b08a"); omit to show the current color
        value: Option<String>,
    },

    /// Log in to the remote group service and store the bearer token
    Login {
        /// Username
        username: String,

        /// Password
        password: String,
    },

    /// Forget the stored bearer token
    Logout,
}
