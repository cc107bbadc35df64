//! Event records and the seven-day query window.
//!
//! Event timestamps are stored as UTC instants; all day-keying and slot-label
//! math projects through an explicit [`chrono_tz::Tz`] so results are
//! reproducible regardless of the host's process-local zone.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::recurrence::add_days;

/// Whether a record opens time for booking or consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Opening,
    Appointment,
}

/// One raw record from the event source.
///
/// `starts_at < ends_at` is assumed of source data, not validated here; an
/// inverted range expands to zero slots. When `weekly_recurring` is true the
/// record repeats every 7 days from `starts_at` with no end date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub kind: EventKind,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub weekly_recurring: bool,
}

/// The seven-day query window derived from an anchor instant.
///
/// `start` is local midnight of the anchor day. `end` is the last second of
/// anchor + 7 days — wider than the emitted range on purpose, so the source
/// query over-fetches and the engine decides inclusion per record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    /// First emitted day (offset 0), as a local calendar date.
    pub anchor_day: NaiveDate,
    /// Local midnight of `anchor_day`, as a UTC instant.
    pub start: DateTime<Utc>,
    /// Last second of `anchor_day + 7`, as a UTC instant.
    pub end: DateTime<Utc>,
    /// Zone used for all day-keying and slot-label arithmetic.
    pub tz: Tz,
}

impl Window {
    /// Build the window for the seven days starting at `anchor`'s local day.
    ///
    /// The anchor's time-of-day component is discarded: the window always
    /// begins at local midnight of the anchor's calendar date in `tz`.
    pub fn seven_days(anchor: DateTime<Utc>, tz: Tz) -> Window {
        let anchor_day = anchor.with_timezone(&tz).date_naive();
        let start = resolve_local(tz, anchor_day.and_time(NaiveTime::MIN));
        let end_day = add_days(anchor_day, 7);
        let end_local = end_day.and_time(NaiveTime::MIN) + Duration::seconds(86_399);
        let end = resolve_local(tz, end_local);
        Window {
            anchor_day,
            start,
            end,
            tz,
        }
    }

    /// Local calendar date of an instant, in this window's zone.
    pub fn day_key(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.tz).date_naive()
    }
}

/// Parse an IANA zone name (e.g. `"Europe/Paris"`).
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

/// Map a local wall-clock time to a UTC instant.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times in
/// a DST gap resolve to the first valid instant after the gap.
fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let shifted = local + Duration::hours(1);
            match tz.from_local_datetime(&shifted) {
                LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
                LocalResult::None => Utc.from_utc_datetime(&shifted),
            }
        }
    }
}
