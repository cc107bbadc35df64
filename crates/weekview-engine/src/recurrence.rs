//! Weekly recurrence projection.
//!
//! A weekly-recurring record is anchored at its original start's day-of-week
//! and time-of-day and repeats every 7 days with no end date. Projection
//! finds the single occurrence date relevant to a given window.

use chrono::{Duration, NaiveDate};

/// `date + n` days, as a pure function.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}

/// First weekly occurrence of `start_day` that falls on or after `anchor_day`.
///
/// Steps forward 7 days at a time; a start on or after the anchor is returned
/// unchanged (no backward projection exists).
pub fn project_into_week(start_day: NaiveDate, anchor_day: NaiveDate) -> NaiveDate {
    let mut day = start_day;
    while day < anchor_day {
        day = add_days(day, 7);
    }
    day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn add_days_crosses_month_and_year_boundaries() {
        assert_eq!(add_days(d(2014, 8, 10), 7), d(2014, 8, 17));
        assert_eq!(add_days(d(2014, 8, 28), 7), d(2014, 9, 4));
        assert_eq!(add_days(d(2014, 12, 29), 7), d(2015, 1, 5));
    }

    #[test]
    fn projects_a_past_start_onto_its_weekday_in_the_window() {
        // Monday 2014-08-04, anchored the following Sunday → Monday 08-11.
        assert_eq!(project_into_week(d(2014, 8, 4), d(2014, 8, 10)), d(2014, 8, 11));
        // Two weeks back lands on the same Monday.
        assert_eq!(project_into_week(d(2014, 7, 28), d(2014, 8, 10)), d(2014, 8, 11));
    }

    #[test]
    fn start_on_or_after_anchor_is_unchanged() {
        assert_eq!(project_into_week(d(2014, 8, 10), d(2014, 8, 10)), d(2014, 8, 10));
        assert_eq!(project_into_week(d(2014, 8, 25), d(2014, 8, 10)), d(2014, 8, 25));
    }

    #[test]
    fn projection_preserves_the_weekday() {
        use chrono::Datelike;
        let start = d(2014, 3, 5);
        for offset in 0..60 {
            let anchor = add_days(start, offset);
            let projected = project_into_week(start, anchor);
            assert_eq!(projected.weekday(), start.weekday());
            assert!(projected >= anchor);
            assert!(projected < add_days(anchor, 7));
        }
    }
}
