//! Service duration normalization.
//!
//! Each service carries an optional duration (value + units). The binding
//! slot length for a generation run is the maximum of all participating
//! services' durations, normalized to milliseconds.

use serde::{Deserialize, Serialize};

/// Units a service duration can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationUnits {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnits {
    /// Milliseconds in one unit.
    pub fn as_millis(self) -> i64 {
        match self {
            DurationUnits::Seconds => 1_000,
            DurationUnits::Minutes => 60_000,
            DurationUnits::Hours => 3_600_000,
            DurationUnits::Days => 86_400_000,
        }
    }
}

/// A service's advertised duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceDuration {
    pub value: f64,
    pub units: DurationUnits,
}

impl ServiceDuration {
    pub fn new(value: f64, units: DurationUnits) -> Self {
        Self { value, units }
    }

    /// Duration in milliseconds. Non-finite or non-positive values are 0.
    pub fn as_millis(&self) -> i64 {
        if !self.value.is_finite() || self.value <= 0.0 {
            return 0;
        }
        (self.value * self.units.as_millis() as f64) as i64
    }
}

/// The binding slot length: the maximum of all services' durations in
/// milliseconds. Absent or invalid durations contribute 0, so an all-absent
/// list yields 0 and the generation run produces no slots.
pub fn binding_duration_ms(durations: &[Option<ServiceDuration>]) -> i64 {
    durations
        .iter()
        .flatten()
        .map(ServiceDuration::as_millis)
        .fold(0, i64::max)
}
