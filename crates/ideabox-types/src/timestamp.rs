//! Local-time helpers for idea timestamps.
//!
//! Timestamps are plain strings. The only structure the rest of the system
//! relies on is that a date-bearing value starts with `YYYY-MM-DD`.

use chrono::{Duration, Local, NaiveDate};

const DAY_FORMAT: &str = "%Y-%m-%d";

/// Current local time as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn now_iso() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Today's local calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().date_naive().format(DAY_FORMAT).to_string()
}

/// The `days` calendar dates ending today, oldest first.
pub fn last_days(days: u32) -> Vec<String> {
    days_ending(Local::now().date_naive(), days)
}

/// The `days` calendar dates ending on `end`, oldest first.
pub fn days_ending(end: NaiveDate, days: u32) -> Vec<String> {
    (0..days)
        .rev()
        .map(|back| (end - Duration::days(i64::from(back))).format(DAY_FORMAT).to_string())
        .collect()
}
