use crate::core::datekey;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single calendar entry owned by one member.
///
/// The JSON shape matches the persisted collection exactly: `date` is a
/// `YYYY-MM-DD` day key (local civil date, no timezone), `start_time` and
/// `end_time` are normalized `HH:MM` strings or absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub user_id: String,
    pub created_at: String,
}

impl Event {
    /// Validated constructor for events created by the CLI.
    ///
    /// Enforces the input invariants before anything touches storage:
    /// - title non-empty after trimming
    /// - date parses to a real calendar day
    /// - start < end when both times are present
    ///
    /// `start`/`end` must already be normalized (see `datekey::normalize_time`);
    /// lexical comparison is valid because both are zero-padded HH:MM.
    pub fn build(
        title: &str,
        date_key: &str,
        start_time: Option<String>,
        end_time: Option<String>,
        user_id: &str,
    ) -> AppResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::InvalidEvent("title must not be empty".into()));
        }

        datekey::from_key(date_key)
            .map_err(|_| AppError::InvalidEvent(format!("invalid date '{}'", date_key)))?;

        if let (Some(s), Some(e)) = (&start_time, &end_time)
            && datekey::compare_times(s, e) != std::cmp::Ordering::Less
        {
            return Err(AppError::InvalidEvent(
                "end time must be later than start time".into(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            date: date_key.to_string(),
            start_time,
            end_time,
            user_id: user_id.to_string(),
            created_at: Local::now().to_rfc3339(),
        })
    }
}
