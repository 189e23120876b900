//! Property-based tests for slot generation using proptest.
//!
//! These verify invariants that should hold for *any* well-formed schedule
//! input, not just the handpicked examples in `generator_tests.rs`.

use proptest::prelude::*;
use slot_engine::timefmt::parse_time_of_day;
use slot_engine::{
    generate_slots_with, group_by_day, DurationUnits, FixedClock, ScheduleEntry, ServiceDuration,
};

// ---------------------------------------------------------------------------
// Strategies — generate well-formed weekly schedules
// ---------------------------------------------------------------------------

fn fmt_minute(m: u32) -> String {
    format!("{:02}:{:02}:00", m / 60, m % 60)
}

/// A valid entry: day 0-6, start within the day, end after start and before
/// midnight.
fn arb_entry() -> impl Strategy<Value = ScheduleEntry> {
    (0u8..=6, 0u32..=1200, 15u32..=240).prop_map(|(day, start, len)| ScheduleEntry {
        day_of_week: day,
        start_time: fmt_minute(start),
        end_time: fmt_minute((start + len).min(1439)),
    })
}

fn arb_schedules() -> impl Strategy<Value = Vec<Vec<ScheduleEntry>>> {
    prop::collection::vec(prop::collection::vec(arb_entry(), 1..6), 1..4)
}

fn arb_duration_minutes() -> impl Strategy<Value = u32> {
    15u32..=120
}

fn arb_clock() -> impl Strategy<Value = FixedClock> {
    (0u8..=6, 0i64..86_400_000).prop_map(|(day, ms)| FixedClock::new(day, ms))
}

fn durations_of(minutes: u32) -> Vec<Option<ServiceDuration>> {
    vec![Some(ServiceDuration::new(
        f64::from(minutes),
        DurationUnits::Minutes,
    ))]
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Every emitted slot has exactly the binding length
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn every_slot_has_binding_length(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let binding_ms = i64::from(dur_min) * 60_000;
        let slots = generate_slots_with(&schedules, &durations_of(dur_min), &clock, None);

        for slot in &slots {
            let start = parse_time_of_day(&slot.start_time).unwrap();
            let end = parse_time_of_day(&slot.end_time).unwrap();
            prop_assert_eq!(
                end - start,
                binding_ms,
                "slot {}-{} is not {} minutes long",
                &slot.start_time,
                &slot.end_time,
                dur_min
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Slots lie within every service's bounds for their day
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn slots_lie_within_every_services_day_bounds(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let slots = generate_slots_with(&schedules, &durations_of(dur_min), &clock, None);
        let grouped: Vec<_> = schedules.iter().map(|s| group_by_day(s)).collect();

        for slot in &slots {
            let start = parse_time_of_day(&slot.start_time).unwrap();
            let end = parse_time_of_day(&slot.end_time).unwrap();

            for service in &grouped {
                let day = service.iter().find(|d| d.day == slot.day_of_week);
                prop_assert!(
                    day.is_some(),
                    "slot on day {} but a service has no entries for it",
                    slot.day_of_week
                );
                let day = day.unwrap();
                prop_assert!(start >= day.earliest_start());
                prop_assert!(end <= day.latest_end());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: Same-day slots are contiguous and step by the binding length
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn same_day_slots_step_by_binding_length(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let binding_ms = i64::from(dur_min) * 60_000;
        let slots = generate_slots_with(&schedules, &durations_of(dur_min), &clock, None);

        for pair in slots.windows(2) {
            if pair[0].day_of_week != pair[1].day_of_week {
                continue;
            }
            let a = parse_time_of_day(&pair[0].start_time).unwrap();
            let b = parse_time_of_day(&pair[1].start_time).unwrap();
            prop_assert_eq!(b - a, binding_ms, "consecutive same-day slots must abut");
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: No slot on "today" starts before the clock
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_elapsed_slot_on_today(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let now = clock.0;
        let slots = generate_slots_with(&schedules, &durations_of(dur_min), &clock, None);

        for slot in &slots {
            if slot.day_of_week == now.day_of_week {
                let start = parse_time_of_day(&slot.start_time).unwrap();
                prop_assert!(
                    start >= now.ms_of_day,
                    "slot starting {} has already elapsed at {}",
                    &slot.start_time,
                    now.ms_of_day
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Idempotence under a fixed clock
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn idempotent_under_fixed_clock(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let durations = durations_of(dur_min);
        let first = generate_slots_with(&schedules, &durations, &clock, None);
        let second = generate_slots_with(&schedules, &durations, &clock, None);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 6: One empty service empties the result
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn one_empty_service_empties_the_result(
        schedules in arb_schedules(),
        dur_min in arb_duration_minutes(),
        clock in arb_clock(),
    ) {
        let mut schedules = schedules;
        schedules.push(Vec::new());
        let slots = generate_slots_with(&schedules, &durations_of(dur_min), &clock, None);
        prop_assert!(slots.is_empty());
    }
}
