//! Day and week boundary helpers plus duration formatting.
//!
//! Everything in this module is pure and operates on naive local timestamps,
//! which is also how timestamps are stored in the database. Negative or
//! otherwise invalid durations are always clamped to zero before display.
//!
//! ## Format Specifications
//!
//! - [`format_duration`] renders live elapsed time as `"Hh Mm Ss"` once a
//!   full hour has passed, otherwise `"Mm Ss"`.
//! - [`format_minutes`] renders aggregated totals as `"Hh Mm"` once they
//!   reach 60 minutes, otherwise `"Mm"`, rounding to the nearest minute.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Truncates a timestamp to local midnight of the same day.
pub fn start_of_day(instant: NaiveDateTime) -> NaiveDateTime {
    NaiveDateTime::new(instant.date(), NaiveTime::MIN)
}

/// Returns the most recent Monday midnight at or before `instant`.
///
/// The week starts on Monday regardless of locale, so a Sunday maps to the
/// Monday six days earlier.
pub fn start_of_week(instant: NaiveDateTime) -> NaiveDateTime {
    let days_back = instant.weekday().num_days_from_monday() as i64;
    start_of_day(instant) - Duration::days(days_back)
}

/// Duration between two instants, rounded to the nearest whole minute.
///
/// This is the value frozen into a session record at close time. The result
/// is never negative.
pub fn duration_minutes(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let ms = (end - start).num_milliseconds().max(0);
    (ms as f64 / 60_000.0).round() as i64
}

/// Duration between two instants in fractional minutes, clamped to zero.
///
/// Aggregation keeps fractional minutes and only rounds at display time so
/// that live counters move smoothly.
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    let ms = (end - start).num_milliseconds().max(0);
    ms as f64 / 60_000.0
}

/// Formats a duration for the live dashboard, e.g. `"2h 5m 31s"` or `"45m 8s"`.
pub fn format_duration(duration: &Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let h = total_seconds / 3600;
    let m = (total_seconds % 3600) / 60;
    let s = total_seconds % 60;

    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else {
        format!("{}m {}s", m, s)
    }
}

/// Formats a minute total for tables, e.g. `"3h 20m"` or `"45m"`.
///
/// Rounds to the nearest minute and clamps negative input to zero.
pub fn format_minutes(minutes: f64) -> String {
    let m = minutes.round().max(0.0) as i64;
    let h = m / 60;
    let rem = m % 60;

    if h > 0 {
        format!("{}h {}m", h, rem)
    } else {
        format!("{}m", rem)
    }
}
