//! # weekview-engine
//!
//! Computes a week-at-a-glance booking grid: for a given anchor date, the
//! next seven calendar days' bookable half-hour slots, derived from
//! "opening" records minus "appointment" records, either of which may be
//! weekly recurring with no end date.
//!
//! The engine is pure and synchronous. Records come from an [`EventSource`]
//! (one query per call), are expanded into half-hour slot labels, projected
//! into the target week when recurring, bucketed per day, and assembled into
//! exactly seven `{date, slots}` entries.
//!
//! ## Modules
//!
//! - [`slots`] — time range → ordered half-hour slot labels
//! - [`recurrence`] — weekly projection of a past record into the window
//! - [`buckets`] — ordered day-key → slot-sequence maps
//! - [`engine`] — the accumulation pass and final assembly
//! - [`source`] — the event-source seam and an in-memory reference source
//! - [`error`] — error types

pub mod buckets;
pub mod engine;
pub mod error;
pub mod event;
pub mod recurrence;
pub mod slots;
pub mod source;

pub use engine::{compute_availability, get_availabilities, DayAvailability};
pub use error::EngineError;
pub use event::{parse_timezone, Event, EventKind, Window};
pub use recurrence::add_days;
pub use slots::{expand_slots, SlotLabel};
pub use source::{EventSource, InMemorySource};
