//! Weekly schedule entries and per-day grouping.
//!
//! A service's schedule is a flat list of weekly recurring entries
//! (day-of-week + start/end time). Grouping filters out malformed entries and
//! collects the survivors into per-day range lists, preserving the order in
//! which days first appear — downstream iteration follows discovery order,
//! not numeric day order.

use serde::{Deserialize, Serialize};

use crate::timefmt::parse_time_of_day;

/// One weekly recurring schedule entry in EAT.
///
/// `day_of_week` is 0–6 with Sunday = 0; times are `"HH:MM:SS"` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub day_of_week: u8,
    pub start_time: String,
    pub end_time: String,
}

/// Valid `(start_ms, end_ms)` ranges for a single day, in entry order.
///
/// Only constructed once a day has its first valid range, so `ranges` is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRanges {
    pub day: u8,
    pub ranges: Vec<(i64, i64)>,
}

impl DayRanges {
    /// Earliest range start on this day.
    pub fn earliest_start(&self) -> i64 {
        self.ranges.iter().map(|r| r.0).min().unwrap_or(i64::MAX)
    }

    /// Latest range end on this day.
    pub fn latest_end(&self) -> i64 {
        self.ranges.iter().map(|r| r.1).max().unwrap_or(i64::MIN)
    }
}

/// Group a service's entries into per-day range lists.
///
/// Entries with an out-of-range day, an unparseable time, or `start >= end`
/// are dropped silently. Days keep first-seen order; ranges within a day keep
/// entry order.
pub fn group_by_day(entries: &[ScheduleEntry]) -> Vec<DayRanges> {
    let mut grouped: Vec<DayRanges> = Vec::new();

    for entry in entries {
        if entry.day_of_week > 6 {
            continue;
        }
        let (Ok(start), Ok(end)) = (
            parse_time_of_day(&entry.start_time),
            parse_time_of_day(&entry.end_time),
        ) else {
            continue;
        };
        if start >= end {
            continue;
        }

        match grouped.iter_mut().find(|d| d.day == entry.day_of_week) {
            Some(day) => day.ranges.push((start, end)),
            None => grouped.push(DayRanges {
                day: entry.day_of_week,
                ranges: vec![(start, end)],
            }),
        }
    }

    grouped
}
