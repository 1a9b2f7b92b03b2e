//! Per-day aggregation: the sorted event list and the distinct occupants
//! for one calendar day. Every view (day list, week buckets, busy markers)
//! goes through these two queries.

use crate::core::store::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;

/// Events on `day_key`, sorted ascending by start time, then title.
/// An absent start time sorts as the empty string, i.e. before any `HH:MM`.
pub fn events_on_day(store: &EventStore, day_key: &str) -> AppResult<Vec<Event>> {
    let mut events: Vec<Event> = store
        .load_all()?
        .into_iter()
        .filter(|e| e.date == day_key)
        .collect();

    sort_day_events(&mut events);
    Ok(events)
}

/// Distinct user ids with at least one event on `day_key`, in first-seen
/// storage order. Deterministic so busy-indicator rendering is stable
/// across re-renders.
pub fn occupants_on_day(store: &EventStore, day_key: &str) -> AppResult<Vec<String>> {
    let mut seen: Vec<String> = Vec::new();
    for e in store.load_all()? {
        if e.date == day_key && !seen.contains(&e.user_id) {
            seen.push(e.user_id);
        }
    }
    Ok(seen)
}

pub(crate) fn sort_day_events(events: &mut [Event]) {
    events.sort_by(|a, b| {
        let ta = a.start_time.as_deref().unwrap_or("");
        let tb = b.start_time.as_deref().unwrap_or("");
        ta.cmp(tb).then_with(|| a.title.cmp(&b.title))
    });
}
