//! Time utilities: parsing backend start times and formatting clock values.

use chrono::{NaiveDateTime, NaiveTime};

/// Parse a backend start time. Accepts `HH:MM:SS` and `HH:MM`.
pub fn parse_start_time(raw: &str) -> Option<NaiveTime> {
    let s = raw.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .ok()
}

/// 12-hour clock with minutes, e.g. `09:15 AM`.
pub fn format_clock(t: NaiveDateTime) -> String {
    t.format("%I:%M %p").to_string()
}
