//! Canonical day-key and time normalization.
//!
//! A day key is the zero-padded `YYYY-MM-DD` string for a local civil date.
//! Keys are built from local calendar fields, never a UTC conversion, so a
//! day never shifts across timezones.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap());

static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01]\d|2[0-3]):([0-5]\d)$").unwrap());

/// Canonical `YYYY-MM-DD` key for a date.
pub fn to_key(date: NaiveDate) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Inverse of `to_key`. Fails on anything that is not an exact-pattern key
/// decomposing to a possible calendar date (month 13, Feb 30, ...).
pub fn from_key(key: &str) -> AppResult<NaiveDate> {
    let caps = KEY_RE
        .captures(key)
        .ok_or_else(|| AppError::InvalidDateKey(key.to_string()))?;

    // the pattern guarantees the captures are numeric
    let year: i32 = caps[1].parse().unwrap();
    let month: u32 = caps[2].parse().unwrap();
    let day: u32 = caps[3].parse().unwrap();

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| AppError::InvalidDateKey(key.to_string()))
}

/// Trim and validate a raw `HH:MM` input.
///
/// Empty input and anything that is not a two-digit 00-23 hour with a
/// two-digit 00-59 minute both normalize to `None` ("no time specified").
pub fn normalize_time(raw: &str) -> Option<String> {
    let v = raw.trim();
    if v.is_empty() {
        return None;
    }
    if !TIME_RE.is_match(v) {
        return None;
    }
    Some(v.to_string())
}

/// Lexical comparison of two normalized times. Valid only because both
/// inputs are zero-padded fixed-width `HH:MM`.
pub fn compare_times(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}
