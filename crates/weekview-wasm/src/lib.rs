//! WASM bindings for weekview-engine.
//!
//! Exposes the seven-day grid computation to JavaScript via `wasm-bindgen`.
//! All complex types cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p weekview-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/weekview-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/weekview_wasm.wasm
//! ```

use chrono::{NaiveDate, TimeZone};
use wasm_bindgen::prelude::*;
use weekview_engine::{get_availabilities, parse_timezone, Event, InMemorySource};

/// Compute the seven-day availability grid.
///
/// # Arguments
/// - `events_json` — JSON array of event records:
///   `{"kind": "opening"|"appointment", "starts_at": ..., "ends_at": ...,
///     "weekly_recurring": bool}` with RFC 3339 timestamps
/// - `anchor` — anchor day as `"YYYY-MM-DD"`
/// - `timezone` — IANA zone name (e.g. `"Europe/Paris"`)
///
/// Returns a JSON array of seven `{date, slots}` entries, e.g.
/// `[{"date":"2014-08-11","slots":["9:30","10:00"]}, ...]`.
#[wasm_bindgen]
pub fn get_availabilities_json(
    events_json: &str,
    anchor: &str,
    timezone: &str,
) -> Result<String, JsValue> {
    compute(events_json, anchor, timezone).map_err(|e| JsValue::from_str(&e))
}

/// The actual work, kept off the wasm-bindgen surface so native tests can
/// call it without a JS runtime.
fn compute(events_json: &str, anchor: &str, timezone: &str) -> Result<String, String> {
    let tz = parse_timezone(timezone).map_err(|e| e.to_string())?;

    let anchor_day: NaiveDate = anchor
        .parse()
        .map_err(|_| format!("invalid anchor day: {}", anchor))?;
    let noon = anchor_day
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| format!("invalid anchor day: {}", anchor))?;
    let anchor_instant = tz
        .from_local_datetime(&noon)
        .earliest()
        .ok_or_else(|| format!("noon on {} does not exist in {}", anchor_day, timezone))?
        .with_timezone(&chrono::Utc);

    let events: Vec<Event> =
        serde_json::from_str(events_json).map_err(|e| format!("invalid events JSON: {}", e))?;

    let source = InMemorySource::new(events);
    let grid = get_availabilities(&source, anchor_instant, tz).map_err(|e| e.to_string())?;

    serde_json::to_string(&grid).map_err(|e| e.to_string())
}
