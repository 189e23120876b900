//! Wall-clock access pinned to the EAT reference timezone.
//!
//! All slot arithmetic happens in East Africa Time (`Africa/Nairobi`) so slot
//! boundaries are stable regardless of the caller's locale. The [`Clock`]
//! trait is the single seam for the current time — production code reads
//! [`SystemClock`] once per generation run, tests freeze a [`FixedClock`].

use chrono::{Datelike, Timelike, Utc};
use chrono_tz::Tz;

/// The fixed reference timezone (UTC+3) for all slot computation.
pub const EAT: Tz = chrono_tz::Africa::Nairobi;

/// A moment on the weekly clock: day-of-week plus millisecond-of-day, in EAT.
///
/// `day_of_week` uses Sunday = 0 numbering, matching the day keys carried by
/// schedule entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub day_of_week: u8,
    pub ms_of_day: i64,
}

impl LocalMoment {
    pub fn new(day_of_week: u8, ms_of_day: i64) -> Self {
        Self {
            day_of_week,
            ms_of_day,
        }
    }
}

/// Source of the current EAT wall-clock moment.
pub trait Clock {
    fn now(&self) -> LocalMoment;
}

/// Reads the real system clock via `chrono::Utc::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> LocalMoment {
        let local = Utc::now().with_timezone(&EAT);
        let ms_of_day = i64::from(local.num_seconds_from_midnight()) * 1_000
            + i64::from(local.nanosecond() / 1_000_000);
        LocalMoment {
            day_of_week: local.weekday().num_days_from_sunday() as u8,
            ms_of_day,
        }
    }
}

/// A frozen moment, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub LocalMoment);

impl FixedClock {
    pub fn new(day_of_week: u8, ms_of_day: i64) -> Self {
        Self(LocalMoment::new(day_of_week, ms_of_day))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> LocalMoment {
        self.0
    }
}
