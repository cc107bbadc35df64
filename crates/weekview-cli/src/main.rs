//! `weekview` CLI — print a seven-day half-hour availability grid.
//!
//! ## Usage
//!
//! ```sh
//! # Text grid for the week starting 2014-08-10, events from a JSON file
//! weekview grid --events events.json --date 2014-08-10
//!
//! # Same grid as JSON, day-keyed in a specific zone
//! weekview grid --events events.json --date 2014-08-10 --timezone Europe/Paris --json
//!
//! # Show the computed query window bounds (debug aid)
//! weekview window --date 2014-08-10
//! ```
//!
//! The events file is a JSON array of records:
//! `{"kind": "opening"|"appointment", "starts_at": ..., "ends_at": ...,
//!   "weekly_recurring": bool}` with RFC 3339 timestamps.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use weekview_engine::{get_availabilities, parse_timezone, Event, InMemorySource, Window};

#[derive(Parser)]
#[command(
    name = "weekview",
    version,
    about = "Seven-day half-hour availability grid from opening/appointment records"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute and print the availability grid
    Grid {
        /// JSON file holding the event records
        #[arg(short, long)]
        events: String,
        /// Anchor day of the window (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// IANA zone for day keys and slot labels
        #[arg(short, long, default_value = "UTC")]
        timezone: String,
        /// Emit the grid as a JSON array instead of text lines
        #[arg(long)]
        json: bool,
    },
    /// Print the seven-day query window bounds for an anchor day
    Window {
        /// Anchor day of the window (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// IANA zone for day keys and slot labels
        #[arg(short, long, default_value = "UTC")]
        timezone: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Grid {
            events,
            date,
            timezone,
            json,
        } => {
            let tz = parse_timezone(&timezone)?;
            let records = read_events(&events)?;
            let source = InMemorySource::new(records);
            let grid = get_availabilities(&source, anchor_instant(date, tz)?, tz)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                for day in &grid {
                    if day.slots.is_empty() {
                        println!("{}  -", day.date);
                    } else {
                        let labels: Vec<String> =
                            day.slots.iter().map(|s| s.to_string()).collect();
                        println!("{}  {}", day.date, labels.join(" "));
                    }
                }
            }
        }
        Commands::Window { date, timezone } => {
            let tz = parse_timezone(&timezone)?;
            let window = Window::seven_days(anchor_instant(date, tz)?, tz);
            println!("anchor day:  {}", window.anchor_day);
            println!("query start: {}", window.start.to_rfc3339());
            println!("query end:   {}", window.end.to_rfc3339());
        }
    }

    Ok(())
}

/// Read and parse the events file.
fn read_events(path: &str) -> Result<Vec<Event>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file '{}'", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse events file '{}'", path))
}

/// Noon local on the anchor day, as a UTC instant.
///
/// The engine discards the time-of-day anyway; noon sidesteps zones whose
/// midnight falls in a DST gap.
fn anchor_instant(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .context("invalid anchor date")?;
    let local = tz
        .from_local_datetime(&noon)
        .earliest()
        .with_context(|| format!("noon on {} does not exist in {}", date, tz))?;
    Ok(local.with_timezone(&Utc))
}
