//! Durable event collection.
//!
//! The whole collection is one JSON array under a single kv key. Every
//! append is a read-modify-write of the full array, mirroring the original
//! storage behavior; acceptable at expected volumes.

use crate::db::kv;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use rusqlite::Connection;

const EVENTS_KEY: &str = "events_v1";

/// Sole owner of the persisted Event collection. Append-only from the
/// caller's perspective: events are written once and never mutated.
pub struct EventStore<'a> {
    conn: &'a Connection,
}

impl<'a> EventStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All persisted events in storage order (no guaranteed sort).
    ///
    /// Fails soft: a missing key, invalid JSON or a non-array root yields an
    /// empty collection rather than an error.
    pub fn load_all(&self) -> AppResult<Vec<Event>> {
        let raw = kv::get(self.conn, EVENTS_KEY)?;
        Ok(raw
            .and_then(|s| serde_json::from_str::<Vec<Event>>(&s).ok())
            .unwrap_or_default())
    }

    /// Append one event and persist the full updated collection.
    ///
    /// Performs no validation; callers construct events through
    /// `Event::build`, which enforces the input invariants.
    pub fn append(&self, event: &Event) -> AppResult<()> {
        let mut events = self.load_all()?;
        events.push(event.clone());
        let raw = serde_json::to_string(&events)
            .map_err(|e| AppError::Other(e.to_string()))?;
        kv::put(self.conn, EVENTS_KEY, &raw)
    }
}
