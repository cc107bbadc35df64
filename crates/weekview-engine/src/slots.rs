//! Half-hour slot labels and interval-to-slot expansion.
//!
//! A slot label names the start of a 30-minute block as a local time of day,
//! rendered without a zero-padded hour (`"9:30"`, `"14:00"`). Labels are the
//! unit of both grid output and booked-slot subtraction: two labels are equal
//! iff they denote the same half-hour start.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Timelike, Utc};
use chrono_tz::Tz;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Canonical start-of-block identifier at half-hour granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotLabel {
    hour: u32,
    minute: u32,
}

impl SlotLabel {
    pub fn new(hour: u32, minute: u32) -> SlotLabel {
        SlotLabel { hour, minute }
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }
}

impl fmt::Display for SlotLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for SlotLabel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidSlotLabel(s.to_string());
        let (hour, minute) = s.split_once(':').ok_or_else(invalid)?;
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }
        Ok(SlotLabel { hour, minute })
    }
}

impl Serialize for SlotLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SlotLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Expand `[starts_at, ends_at)` into slot labels at 30-minute steps.
///
/// The label at `ends_at` itself is never produced — the end boundary is
/// exclusive, so a record ending at T and another starting at T share no
/// label. An inverted or empty range yields no labels.
///
/// Inputs are assumed aligned to half-hour boundaries; unaligned inputs are
/// stepped as-is with no snapping (known limitation, inherited from the
/// source data contract).
pub fn expand_slots(starts_at: DateTime<Utc>, ends_at: DateTime<Utc>, tz: Tz) -> Vec<SlotLabel> {
    let mut slots = Vec::new();
    let mut cursor = starts_at;
    while cursor < ends_at {
        let local = cursor.with_timezone(&tz).time();
        slots.push(SlotLabel::new(local.hour(), local.minute()));
        cursor += Duration::minutes(30);
    }
    slots
}
