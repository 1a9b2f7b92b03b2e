use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite key-value store holding events, overlay and caches.
    pub database: String,
    /// Base URL of the remote group service.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// First day of the week: "mon" or "sun".
    #[serde(default = "default_week_start")]
    pub week_start: String,
    /// Time display format: "24" or "12".
    #[serde(default = "default_time_format")]
    pub time_format: String,
    /// Rolling window (in days) for the upcoming preview.
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,
    /// Maximum number of rows in the upcoming preview.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
    /// Group id used when --group is omitted.
    #[serde(default)]
    pub active_group: Option<String>,
    /// Own member id, used as the default event owner.
    #[serde(default = "default_me_id")]
    pub me_id: String,
}

fn default_api_base() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_week_start() -> String {
    "mon".to_string()
}
fn default_time_format() -> String {
    "24".to_string()
}
fn default_upcoming_days() -> u32 {
    7
}
fn default_upcoming_limit() -> usize {
    5
}
fn default_me_id() -> String {
    "me".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            api_base: default_api_base(),
            week_start: default_week_start(),
            time_format: default_time_format(),
            upcoming_days: default_upcoming_days(),
            upcoming_limit: default_upcoming_limit(),
            active_group: None,
            me_id: default_me_id(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("plancal")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".plancal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("plancal.conf")
    }

    /// Return the full path of the SQLite key-value store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("plancal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Persist the current configuration to the config file.
    pub fn save(&self) -> io::Result<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())
    }

    /// Initialize configuration and database files. Returns the resolved
    /// database path (relative names land in the config dir) so the caller
    /// initializes the same file the saved config points at.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("Database:    {:?}", db_path);

        Ok(db_path)
    }
}
