use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::datekey;
use crate::core::range::{WeekStart, week, week_occupants, week_start_of};
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::detail;
use crate::utils::{date, format_time_range};

use super::day::occupant_markers;

/// Rows shown per day bucket; the core returns the full sorted set.
const BUCKET_DISPLAY_CAP: usize = 4;

/// Show the week containing the reference date as seven day buckets.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { from } = cmd {
        let reference = match from {
            Some(d) => datekey::from_key(d)?,
            None => date::today(),
        };

        let start = week_start_of(reference, WeekStart::from_config(&cfg.week_start)?);

        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(&pool.conn);

        let buckets = week(&store, start)?;
        let occupants = week_occupants(&store, start)?;

        for (bucket, occ) in buckets.iter().zip(occupants.iter()) {
            let d = datekey::from_key(&bucket.day)?;
            let busy = if occ.is_empty() {
                "free".to_string()
            } else {
                occupant_markers(occ)
            };
            println!(
                "{} {}  ({})",
                crate::utils::format::weekday_str(d),
                bucket.day,
                busy
            );

            for ev in bucket.events.iter().take(BUCKET_DISPLAY_CAP) {
                detail(format!(
                    "{}  {}",
                    format_time_range(
                        ev.start_time.as_deref(),
                        ev.end_time.as_deref(),
                        &cfg.time_format
                    ),
                    ev.title
                ));
            }
            let hidden = bucket.events.len().saturating_sub(BUCKET_DISPLAY_CAP);
            if hidden > 0 {
                detail(format!("… {} more", hidden));
            }
        }
    }
    Ok(())
}
