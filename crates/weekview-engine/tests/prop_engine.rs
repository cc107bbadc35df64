//! Property-based tests for the availability grid using proptest.
//!
//! These verify invariants that must hold for *any* well-formed record set,
//! not just the reference fixtures in `engine_tests.rs`.

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use proptest::prelude::*;
use weekview_engine::{add_days, get_availabilities, Event, EventKind, InMemorySource};

// ---------------------------------------------------------------------------
// Strategies — generate half-hour-aligned records around a generated anchor
// ---------------------------------------------------------------------------

/// Anchor days across several years, day capped at 28 to avoid invalid dates.
fn arb_anchor_day() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

/// A half-hour-aligned time of day, late enough that a few slots never cross
/// midnight: hours 0..=21, minutes 0 or 30.
fn arb_slot_time() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=21, prop_oneof![Just(0u32), Just(30u32)])
}

/// Duration in half-hour steps, 1..=4 slots.
fn arb_slot_count() -> impl Strategy<Value = i64> {
    1i64..=4
}

fn instant(day: NaiveDate, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_hms_opt(hour, minute, 0).unwrap())
}

fn record(
    kind: EventKind,
    day: NaiveDate,
    hour: u32,
    minute: u32,
    slot_count: i64,
    recurring: bool,
) -> Event {
    let starts_at = instant(day, hour, minute);
    Event {
        kind,
        starts_at,
        ends_at: starts_at + Duration::minutes(30 * slot_count),
        weekly_recurring: recurring,
    }
}

fn grid(events: Vec<Event>, anchor_day: NaiveDate) -> Vec<weekview_engine::DayAvailability> {
    let source = InMemorySource::new(events);
    get_availabilities(&source, instant(anchor_day, 0, 0), Tz::UTC).unwrap()
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

proptest! {
    /// Exactly 7 entries, dated anchor + 0..6 in order, for any input.
    #[test]
    fn grid_shape_is_always_seven_ordered_days(
        anchor in arb_anchor_day(),
        (hour, minute) in arb_slot_time(),
        count in arb_slot_count(),
        day_offset in -30i64..30,
        recurring in any::<bool>(),
    ) {
        let day = add_days(anchor, day_offset);
        let events = vec![record(EventKind::Opening, day, hour, minute, count, recurring)];
        let result = grid(events, anchor);

        prop_assert_eq!(result.len(), 7);
        for (offset, entry) in result.iter().enumerate() {
            prop_assert_eq!(entry.date, add_days(anchor, offset as i64));
        }
    }

    /// Pure function of rows + anchor: same input, same grid.
    #[test]
    fn computation_is_idempotent(
        anchor in arb_anchor_day(),
        (hour, minute) in arb_slot_time(),
        count in arb_slot_count(),
        day_offset in -30i64..30,
        recurring in any::<bool>(),
    ) {
        let day = add_days(anchor, day_offset);
        let events = vec![
            record(EventKind::Opening, day, hour, minute, count, recurring),
            record(EventKind::Appointment, add_days(anchor, 2), hour, minute, 1, false),
        ];
        prop_assert_eq!(grid(events.clone(), anchor), grid(events, anchor));
    }

    /// A label booked by an in-window appointment never appears in that
    /// day's emitted slots, however wide the opening around it.
    #[test]
    fn booked_labels_are_subtracted(
        anchor in arb_anchor_day(),
        (hour, minute) in arb_slot_time(),
        count in arb_slot_count(),
        in_window_offset in 0i64..7,
    ) {
        let day = add_days(anchor, in_window_offset);
        let opening = record(EventKind::Opening, day, hour, minute, count, false);
        let booked = record(EventKind::Appointment, day, hour, minute, 1, false);
        let booked_label = format!("{}:{:02}", hour, minute);

        let result = grid(vec![opening, booked], anchor);
        let emitted: Vec<String> = result[in_window_offset as usize]
            .slots
            .iter()
            .map(|s| s.to_string())
            .collect();

        prop_assert!(!emitted.contains(&booked_label));
        // The rest of the opening survives.
        prop_assert_eq!(emitted.len() as i64, count - 1);
    }

    /// Two abutting openings on one day produce no duplicate labels and
    /// exactly the sum of their slot counts.
    #[test]
    fn abutting_openings_never_share_a_label(
        anchor in arb_anchor_day(),
        (hour, minute) in (0u32..=18, prop_oneof![Just(0u32), Just(30u32)]),
        first_count in 1i64..=3,
        second_count in 1i64..=3,
        in_window_offset in 0i64..7,
    ) {
        let day = add_days(anchor, in_window_offset);
        let first = record(EventKind::Opening, day, hour, minute, first_count, false);
        let second = Event {
            kind: EventKind::Opening,
            starts_at: first.ends_at,
            ends_at: first.ends_at + Duration::minutes(30 * second_count),
            weekly_recurring: false,
        };

        let result = grid(vec![first, second], anchor);
        let slots = &result[in_window_offset as usize].slots;

        prop_assert_eq!(slots.len() as i64, first_count + second_count);
        let mut deduped = slots.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), slots.len());
    }

    /// A recurring record from before the window appears exactly once, on
    /// the in-window date sharing its original weekday, never elsewhere.
    #[test]
    fn past_recurring_records_project_onto_their_weekday(
        anchor in arb_anchor_day(),
        (hour, minute) in arb_slot_time(),
        count in arb_slot_count(),
        weeks_back in 1i64..=10,
        extra_days_back in 0i64..7,
    ) {
        let day = add_days(anchor, -(7 * weeks_back + extra_days_back));
        let opening = record(EventKind::Opening, day, hour, minute, count, true);
        let result = grid(vec![opening], anchor);

        let non_empty: Vec<_> = result.iter().filter(|d| !d.slots.is_empty()).collect();
        prop_assert_eq!(non_empty.len(), 1);
        prop_assert_eq!(non_empty[0].date.weekday(), day.weekday());
        prop_assert_eq!(non_empty[0].slots.len() as i64, count);
    }
}
