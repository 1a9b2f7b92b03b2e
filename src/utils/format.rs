//! Display formatting for event rows and week headers.

use chrono::{Datelike, NaiveDate, NaiveTime};

/// Human label for an event's time range: "All day" when no times are set,
/// an open-ended range when only one side is present.
pub fn format_time_range(
    start: Option<&str>,
    end: Option<&str>,
    time_format: &str,
) -> String {
    let s = start.map(|t| display_time(t, time_format));
    let e = end.map(|t| display_time(t, time_format));
    match (s, e) {
        (None, None) => "All day".to_string(),
        (Some(s), None) => format!("{} – ?", s),
        (None, Some(e)) => format!("? – {}", e),
        (Some(s), Some(e)) => format!("{} – {}", s, e),
    }
}

/// Render a normalized `HH:MM` for display; 12-hour clock when configured.
pub fn display_time(time: &str, time_format: &str) -> String {
    if time_format != "12" {
        return time.to_string();
    }
    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(t) => t.format("%I:%M %p").to_string(),
        Err(_) => time.to_string(),
    }
}

pub fn weekday_str(date: NaiveDate) -> &'static str {
    match date.weekday().num_days_from_monday() {
        0 => "Mon",
        1 => "Tue",
        2 => "Wed",
        3 => "Thu",
        4 => "Fri",
        5 => "Sat",
        _ => "Sun",
    }
}
