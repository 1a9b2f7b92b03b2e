use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::datekey;
use crate::core::store::EventStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::Event;
use crate::ui::messages::{success, warning};
use crate::utils::format_time_range;

/// Create a calendar event.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        title,
        start,
        end,
        user,
    } = cmd
    {
        //
        // 1. Normalize times. Malformed input counts as "no time specified";
        //    warn so typos don't silently become all-day events.
        //
        let start_norm = normalize_or_warn(start.as_deref(), "start");
        let end_norm = normalize_or_warn(end.as_deref(), "end");

        //
        // 2. Validate and build the event. Nothing is persisted on failure.
        //
        let user_id = user.as_deref().unwrap_or(&cfg.me_id);
        let event = Event::build(title, date, start_norm, end_norm, user_id)?;

        //
        // 3. Append to the store.
        //
        let pool = DbPool::new(&cfg.database)?;
        let store = EventStore::new(&pool.conn);
        store.append(&event)?;

        success(format!(
            "Added \"{}\" on {} ({}).",
            event.title,
            event.date,
            format_time_range(
                event.start_time.as_deref(),
                event.end_time.as_deref(),
                &cfg.time_format
            )
        ));
    }

    Ok(())
}

fn normalize_or_warn(raw: Option<&str>, which: &str) -> Option<String> {
    let raw = raw?;
    let normalized = datekey::normalize_time(raw);
    if normalized.is_none() && !raw.trim().is_empty() {
        warning(format!(
            "Ignoring {} time '{}': expected HH:MM (00-23 hours).",
            which, raw
        ));
    }
    normalized
}
