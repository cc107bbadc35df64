//! The event-source seam.
//!
//! Retrieval of raw records is an external concern: the engine issues one
//! query per computation and consumes whatever rows come back. Sources must
//! over-fetch per the window contract — any past weekly-recurring record is
//! a candidate for projection, and any record merely touching the window is
//! a candidate for direct insertion. The engine decides actual inclusion.

use crate::error::Result;
use crate::event::{Event, Window};

/// A queryable store of event records.
///
/// Implementations return every record where
/// `starts_at <= window.end && weekly_recurring`, or `starts_at` within
/// `[window.start, window.end]`, or `ends_at` within the same bounds,
/// ordered by `starts_at` ascending. Failures map into
/// [`EngineError::Source`](crate::EngineError::Source) and propagate
/// unchanged; the engine never retries or returns partial data.
pub trait EventSource {
    fn load(&self, window: &Window) -> Result<Vec<Event>>;
}

/// Reference source over an in-memory record list.
///
/// Applies the exact query semantics of the trait contract. Sorting is
/// stable, so records sharing a `starts_at` keep their original order.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    events: Vec<Event>,
}

impl InMemorySource {
    pub fn new(events: Vec<Event>) -> InMemorySource {
        InMemorySource { events }
    }
}

impl EventSource for InMemorySource {
    fn load(&self, window: &Window) -> Result<Vec<Event>> {
        let in_bounds = |t| t >= window.start && t <= window.end;
        let mut rows: Vec<Event> = self
            .events
            .iter()
            .filter(|e| {
                (e.weekly_recurring && e.starts_at <= window.end)
                    || in_bounds(e.starts_at)
                    || in_bounds(e.ends_at)
            })
            .cloned()
            .collect();
        rows.sort_by_key(|e| e.starts_at);
        Ok(rows)
    }
}
