use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::datekey;
use crate::core::range::upcoming;
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::detail;
use crate::utils::{date, format_time_range};
use chrono::Days;

/// Show the rolling N-day-ahead preview.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Upcoming { days, limit } = cmd {
        let window = days.unwrap_or(cfg.upcoming_days);
        let limit = limit.unwrap_or(cfg.upcoming_limit);

        let from_date = date::today();
        let from = datekey::to_key(from_date);
        let to = datekey::to_key(from_date + Days::new(u64::from(window)));

        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(&pool.conn);

        let events = upcoming(&store, &from, &to, limit)?;

        if events.is_empty() {
            println!("No upcoming events in the next {} days.", window);
            return Ok(());
        }

        println!("Upcoming ({} days):", window);
        for ev in &events {
            detail(format!(
                "{}  {}  {}  [{}]",
                ev.date,
                format_time_range(
                    ev.start_time.as_deref(),
                    ev.end_time.as_deref(),
                    &cfg.time_format
                ),
                ev.title,
                ev.user_id
            ));
        }
    }
    Ok(())
}
