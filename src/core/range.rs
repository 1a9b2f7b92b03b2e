//! Window queries over the event collection: the rolling upcoming preview
//! and the seven week buckets.

use crate::core::datekey;
use crate::core::day::{self, sort_day_events};
use crate::core::store::EventStore;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use chrono::{Datelike, Days, NaiveDate};

/// Configured first day of the week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekStart {
    Monday,
    Sunday,
}

impl WeekStart {
    /// Parse the config value ("mon" / "sun").
    pub fn from_config(value: &str) -> AppResult<Self> {
        match value {
            "mon" => Ok(WeekStart::Monday),
            "sun" => Ok(WeekStart::Sunday),
            other => Err(AppError::Config(format!(
                "invalid week_start '{}': expected 'mon' or 'sun'",
                other
            ))),
        }
    }
}

/// One day of a week view: the day key and its full sorted event list.
/// Display truncation (the observed cap of 4 rows) is the caller's concern.
#[derive(Debug)]
pub struct DayBucket {
    pub day: String,
    pub events: Vec<Event>,
}

/// Events with `date` in `[from, to)`, sorted by (date, start time, title)
/// and truncated to `limit`.
///
/// The interval is a calendar-day comparison on day keys, which is valid
/// lexically because keys are zero-padded.
pub fn upcoming(
    store: &EventStore,
    from_inclusive: &str,
    to_exclusive: &str,
    limit: usize,
) -> AppResult<Vec<Event>> {
    let mut events: Vec<Event> = store
        .load_all()?
        .into_iter()
        .filter(|e| e.date.as_str() >= from_inclusive && e.date.as_str() < to_exclusive)
        .collect();

    events.sort_by(|a, b| {
        let ta = a.start_time.as_deref().unwrap_or("");
        let tb = b.start_time.as_deref().unwrap_or("");
        a.date
            .cmp(&b.date)
            .then_with(|| ta.cmp(tb))
            .then_with(|| a.title.cmp(&b.title))
    });
    events.truncate(limit);
    Ok(events)
}

/// Seven consecutive day buckets starting at `week_start_day`.
pub fn week(store: &EventStore, week_start_day: NaiveDate) -> AppResult<Vec<DayBucket>> {
    // one pass over the collection instead of seven reloads
    let all = store.load_all()?;

    let mut buckets = Vec::with_capacity(7);
    for offset in 0..7 {
        let d = week_start_day + Days::new(offset);
        let key = datekey::to_key(d);
        let mut events: Vec<Event> = all.iter().filter(|e| e.date == key).cloned().collect();
        sort_day_events(&mut events);
        buckets.push(DayBucket { day: key, events });
    }
    Ok(buckets)
}

/// First day of the week containing `reference`, for the configured week
/// start. Uses the Sunday=0 weekday representation, so both Monday-first
/// and Sunday-first come out right.
pub fn week_start_of(reference: NaiveDate, start: WeekStart) -> NaiveDate {
    let dow = reference.weekday().num_days_from_sunday(); // Sun=0 .. Sat=6
    let first = match start {
        WeekStart::Monday => 1,
        WeekStart::Sunday => 0,
    };
    let offset = (dow + 7 - first) % 7;
    reference - Days::new(u64::from(offset))
}

/// Occupants for each day of a week, in the same bucket order.
pub fn week_occupants(store: &EventStore, week_start_day: NaiveDate) -> AppResult<Vec<Vec<String>>> {
    let mut out = Vec::with_capacity(7);
    for offset in 0..7 {
        let d = week_start_day + Days::new(offset);
        out.push(day::occupants_on_day(store, &datekey::to_key(d))?);
    }
    Ok(out)
}
