use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::datekey;
use crate::core::day::{events_on_day, occupants_on_day};
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::detail;
use crate::utils::{date, format_time_range};

/// Occupant markers shown on a day cell; further occupants are elided.
const MAX_OCCUPANT_MARKERS: usize = 4;

/// Show the sorted events and the busy indicator of one day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date: date_arg } = cmd {
        let day_key = match date_arg {
            Some(d) => {
                datekey::from_key(d)?; // reject malformed keys up front
                d.clone()
            }
            None => datekey::to_key(date::today()),
        };

        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(&pool.conn);

        let events = events_on_day(&store, &day_key)?;
        let occupants = occupants_on_day(&store, &day_key)?;

        println!("{}", day_key);

        if events.is_empty() {
            println!("Free day — no events.");
            return Ok(());
        }

        for ev in &events {
            detail(format!(
                "{}  {}  [{}]",
                format_time_range(
                    ev.start_time.as_deref(),
                    ev.end_time.as_deref(),
                    &cfg.time_format
                ),
                ev.title,
                ev.user_id
            ));
        }

        println!("Busy: {}", occupant_markers(&occupants));
    }
    Ok(())
}

/// First-seen occupants, capped for display ("me, f1, f2, f3 +2").
pub fn occupant_markers(occupants: &[String]) -> String {
    let shown: Vec<&str> = occupants
        .iter()
        .take(MAX_OCCUPANT_MARKERS)
        .map(String::as_str)
        .collect();
    let extra = occupants.len().saturating_sub(MAX_OCCUPANT_MARKERS);
    if extra > 0 {
        format!("{} +{}", shown.join(", "), extra)
    } else {
        shown.join(", ")
    }
}
