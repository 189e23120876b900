//! `"HH:MM:SS"` time-of-day strings ⇄ millisecond-of-day integers.
//!
//! Schedule entries and slots carry times as `"HH:MM:SS"` strings in EAT;
//! interval arithmetic runs on millisecond-of-day integers. Parsing is strict
//! `%H:%M:%S` — anything else is an [`SlotError::InvalidTime`].

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SlotError};

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 86_400_000;

/// Parse a `"HH:MM:SS"` string into milliseconds since midnight.
///
/// # Errors
///
/// Returns [`SlotError::InvalidTime`] if the string does not match `%H:%M:%S`.
pub fn parse_time_of_day(s: &str) -> Result<i64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M:%S")
        .map_err(|_| SlotError::InvalidTime(s.to_string()))?;
    Ok(i64::from(t.num_seconds_from_midnight()) * 1_000)
}

/// Format milliseconds since midnight back into `"HH:MM:SS"`.
///
/// Sub-second precision is truncated; values outside one day wrap around.
pub fn format_time_of_day(ms: i64) -> String {
    let secs = ms.div_euclid(1_000).rem_euclid(86_400) as u32;
    let t = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN);
    t.format("%H:%M:%S").to_string()
}

/// Whole-minute difference between two time-of-day strings (`end - start`).
///
/// # Errors
///
/// Returns [`SlotError::InvalidTime`] if either string does not parse.
pub fn diff_minutes(end: &str, start: &str) -> Result<i64> {
    Ok((parse_time_of_day(end)? - parse_time_of_day(start)?) / 60_000)
}
