//! Ordered per-day slot buckets.
//!
//! One bucket map per record kind is built during the single accumulation
//! pass and discarded after assembly. Append-or-initialize is the only write
//! operation: a new day key takes the incoming slots as its initial content,
//! an existing key appends them after what is already there. No merging, no
//! sorting — within a day, slot order is the order records were processed.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::slots::SlotLabel;

/// Insertion-ordered slot sequences keyed by local calendar date.
#[derive(Debug, Default)]
pub struct DayBuckets {
    inner: BTreeMap<NaiveDate, Vec<SlotLabel>>,
}

impl DayBuckets {
    pub fn new() -> DayBuckets {
        DayBuckets::default()
    }

    /// Append `slots` under `day`, initializing the bucket if the key is new.
    pub fn append_or_insert(&mut self, day: NaiveDate, slots: &[SlotLabel]) {
        self.inner.entry(day).or_default().extend_from_slice(slots);
    }

    /// The slot sequence for `day`, if any record landed there.
    pub fn get(&self, day: NaiveDate) -> Option<&[SlotLabel]> {
        self.inner.get(&day).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
