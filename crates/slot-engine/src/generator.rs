//! The slot generation pipeline.
//!
//! Given N services' weekly schedules and durations, computes the bookable
//! slots common to all services: normalize durations, group each service's
//! schedule by day, intersect the day sets, bound a common window per day,
//! slice it into binding-duration slots, and drop already-elapsed slots for
//! the current day.
//!
//! The per-day window is a bounding box — the max of per-service earliest
//! starts against the min of per-service latest ends — not a true
//! multi-interval intersection. When a service has disjoint ranges on one
//! day, the window may span gaps that service is not actually open for.
//! Downstream consumers rely on this exact shape.

use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::duration::{binding_duration_ms, ServiceDuration};
use crate::schedule::{group_by_day, DayRanges, ScheduleEntry};
use crate::timefmt::format_time_of_day;

/// One bookable slot, tagged with its day-of-week (Sunday = 0).
///
/// Ephemeral value type: produced fresh on every generation run, with no
/// identity beyond its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub start_time: String,
    pub end_time: String,
    pub day_of_week: u8,
}

/// Generate bookable slots against the real system clock.
///
/// Convenience wrapper over [`generate_slots_with`] using [`SystemClock`] and
/// no progress hook.
pub fn generate_slots(
    schedules: &[Vec<ScheduleEntry>],
    durations: &[Option<ServiceDuration>],
) -> Vec<Slot> {
    generate_slots_with(schedules, durations, &SystemClock, None)
}

/// Generate the bookable slots common to all services.
///
/// # Arguments
///
/// * `schedules` — one schedule-entry list per service. If the outer list is
///   empty, or any service's list is empty, the result is empty.
/// * `durations` — one optional duration per service; the binding slot length
///   is the maximum across services. If no positive duration is present, the
///   result is empty.
/// * `clock` — source of "now" in EAT; read once per call.
/// * `on_progress` — optional loading-state hook, invoked with `true` on
///   entry and `false` on exit, exactly once each, on every path including
///   the early-empty returns.
///
/// The function is total: malformed entries are dropped silently and a day
/// with no usable common window is skipped without aborting the run. The
/// clock is the only source of non-determinism — identical inputs and a
/// frozen clock yield identical output, in the same order. Runs synchronously
/// on the calling thread.
pub fn generate_slots_with(
    schedules: &[Vec<ScheduleEntry>],
    durations: &[Option<ServiceDuration>],
    clock: &dyn Clock,
    mut on_progress: Option<&mut dyn FnMut(bool)>,
) -> Vec<Slot> {
    if let Some(progress) = &mut on_progress {
        progress(true);
    }
    let slots = compute_slots(schedules, durations, clock);
    if let Some(progress) = &mut on_progress {
        progress(false);
    }
    slots
}

fn compute_slots(
    schedules: &[Vec<ScheduleEntry>],
    durations: &[Option<ServiceDuration>],
    clock: &dyn Clock,
) -> Vec<Slot> {
    if schedules.is_empty() || schedules.iter().any(|s| s.is_empty()) {
        return Vec::new();
    }

    let binding_ms = binding_duration_ms(durations);
    if binding_ms <= 0 {
        return Vec::new();
    }

    let grouped: Vec<Vec<DayRanges>> = schedules.iter().map(|s| group_by_day(s)).collect();
    let now = clock.now();

    let mut slots = Vec::new();
    for day in discovery_order_days(&grouped) {
        // A day counts only when every service has ranges for it.
        let per_service: Option<Vec<&DayRanges>> = grouped
            .iter()
            .map(|service| service.iter().find(|d| d.day == day))
            .collect();
        let Some(per_service) = per_service else {
            continue;
        };

        let common_start = per_service
            .iter()
            .fold(i64::MIN, |acc, d| acc.max(d.earliest_start()));
        let common_end = per_service
            .iter()
            .fold(i64::MAX, |acc, d| acc.min(d.latest_end()));
        if common_start >= common_end {
            continue;
        }

        let mut start = common_start;
        while start + binding_ms <= common_end {
            let elapsed_today = day == now.day_of_week && start < now.ms_of_day;
            if !elapsed_today {
                slots.push(Slot {
                    start_time: format_time_of_day(start),
                    end_time: format_time_of_day(start + binding_ms),
                    day_of_week: day,
                });
            }
            start += binding_ms;
        }
    }

    slots
}

/// Days in the order they are first seen while scanning services.
fn discovery_order_days(grouped: &[Vec<DayRanges>]) -> Vec<u8> {
    let mut days = Vec::new();
    for service in grouped {
        for day_ranges in service {
            if !days.contains(&day_ranges.day) {
                days.push(day_ranges.day);
            }
        }
    }
    days
}
