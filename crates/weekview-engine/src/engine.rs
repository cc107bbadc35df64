//! The accumulation pass and final assembly.
//!
//! One pass over the loaded records fills two [`DayBuckets`] maps (openings
//! and appointments); assembly then walks day offsets 0..6 and subtracts
//! booked labels from open labels per day. Pure and deterministic given the
//! loaded rows and the window.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::buckets::DayBuckets;
use crate::error::Result;
use crate::event::{Event, EventKind, Window};
use crate::recurrence::{add_days, project_into_week};
use crate::slots::{expand_slots, SlotLabel};
use crate::source::EventSource;

/// One day of the emitted grid. `slots` may be empty, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub slots: Vec<SlotLabel>,
}

/// Compute the seven-day availability grid for the week starting at
/// `anchor`'s local day.
///
/// Queries `source` once for the window's candidate records, then runs the
/// pure [`compute_availability`] pass. A source failure propagates unchanged;
/// no partial grid is returned.
pub fn get_availabilities(
    source: &impl EventSource,
    anchor: DateTime<Utc>,
    tz: Tz,
) -> Result<Vec<DayAvailability>> {
    let window = Window::seven_days(anchor, tz);
    let events = source.load(&window)?;
    Ok(compute_availability(&events, &window))
}

/// Bucket `events` per day and assemble the seven-entry grid.
///
/// Records must arrive ordered by `starts_at` ascending (the source
/// contract); within a day, slot order follows that record order.
pub fn compute_availability(events: &[Event], window: &Window) -> Vec<DayAvailability> {
    let mut openings = DayBuckets::new();
    let mut appointments = DayBuckets::new();

    for event in events {
        let slots = expand_slots(event.starts_at, event.ends_at, window.tz);
        let own_day = window.day_key(event.starts_at);
        let target = match event.kind {
            EventKind::Opening => &mut openings,
            EventKind::Appointment => &mut appointments,
        };

        if event.starts_at >= window.start {
            // In-window record: bucket under its own day. Days past offset 6
            // may receive slots here; assembly never reads them.
            target.append_or_insert(own_day, &slots);
        } else if event.weekly_recurring {
            // Historical recurring record: only its projected occurrence in
            // the target week matters, never its own day key.
            let projected = project_into_week(own_day, window.anchor_day);
            target.append_or_insert(projected, &slots);
        }
        // Historical one-time records fall through: out of window entirely.
    }

    (0..7)
        .map(|offset| {
            let date = add_days(window.anchor_day, offset);
            let slots = match openings.get(date) {
                Some(open) => {
                    let booked = appointments.get(date).unwrap_or(&[]);
                    open.iter().copied().filter(|s| !booked.contains(s)).collect()
                }
                None => Vec::new(),
            };
            DayAvailability { date, slots }
        })
        .collect()
}
