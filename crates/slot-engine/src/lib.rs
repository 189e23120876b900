//! # slot-engine
//!
//! Multi-service bookable slot generation pinned to a fixed clinic timezone.
//!
//! Given several services' independent weekly recurring schedules and their
//! durations, computes the ordered list of bookable time windows that satisfy
//! all services simultaneously, sliced into fixed-length slots in East Africa
//! Time, with already-elapsed slots excluded for the current day.
//!
//! ## Quick start
//!
//! ```rust
//! use slot_engine::{
//!     generate_slots_with, DurationUnits, FixedClock, ScheduleEntry, ServiceDuration,
//! };
//!
//! let physio = vec![ScheduleEntry {
//!     day_of_week: 3,
//!     start_time: "09:00:00".into(),
//!     end_time: "12:00:00".into(),
//! }];
//! let lab = vec![ScheduleEntry {
//!     day_of_week: 3,
//!     start_time: "10:00:00".into(),
//!     end_time: "16:00:00".into(),
//! }];
//! let durations = vec![Some(ServiceDuration::new(1.0, DurationUnits::Hours)), None];
//!
//! // Saturday 08:00 — nothing on the common Wednesday has elapsed yet.
//! let clock = FixedClock::new(6, 8 * 3_600_000);
//! let slots = generate_slots_with(&[physio, lab], &durations, &clock, None);
//! assert_eq!(slots.len(), 2);
//! assert_eq!(slots[0].start_time, "10:00:00");
//! assert_eq!(slots[1].end_time, "12:00:00");
//! ```
//!
//! ## Modules
//!
//! - [`generator`] — the slot generation pipeline ([`generate_slots`])
//! - [`schedule`] — weekly schedule entries and per-day grouping
//! - [`duration`] — duration units and binding-duration normalization
//! - [`timefmt`] — `"HH:MM:SS"` ⇄ millisecond-of-day conversion
//! - [`clock`] — EAT wall-clock access, injectable for tests
//! - [`error`] — error types

pub mod clock;
pub mod duration;
pub mod error;
pub mod generator;
pub mod schedule;
pub mod timefmt;

pub use clock::{Clock, FixedClock, LocalMoment, SystemClock, EAT};
pub use duration::{binding_duration_ms, DurationUnits, ServiceDuration};
pub use error::SlotError;
pub use generator::{generate_slots, generate_slots_with, Slot};
pub use schedule::{group_by_day, DayRanges, ScheduleEntry};
