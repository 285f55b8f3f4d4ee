//! Time helpers for toll passings
//!
//! Passings are local `NaiveDateTime` values with no zone attached. This
//! module provides the clock and calendar predicates shared by the fee
//! schedule, the toll-free calendars and the fee aggregator.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Number of minutes in one calendar day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Minute of the day for an hour/minute pair
///
/// # Example
/// ```
/// use toll_fee_core_rs::core::time::minute_of_day;
///
/// assert_eq!(minute_of_day(0, 0), 0);
/// assert_eq!(minute_of_day(6, 30), 390);
/// ```
pub fn minute_of_day(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

/// Minute of the day a passing happened at (seconds are ignored)
pub fn passing_minute_of_day(at: &NaiveDateTime) -> u32 {
    minute_of_day(at.hour(), at.minute())
}

/// Saturday or Sunday
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use toll_fee_core_rs::core::time::is_weekend;
///
/// let saturday = NaiveDate::from_ymd_opt(2013, 2, 9).unwrap();
/// let thursday = NaiveDate::from_ymd_opt(2013, 2, 7).unwrap();
/// assert!(is_weekend(saturday));
/// assert!(!is_weekend(thursday));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whole minutes elapsed from `previous` to `current`
pub fn minutes_between(previous: NaiveDateTime, current: NaiveDateTime) -> i64 {
    current.signed_duration_since(previous).num_minutes()
}

/// Check if `current` still belongs to the rolling window of `previous`
///
/// The gap is compared at full precision and the bound is inclusive: a gap
/// of exactly `window_minutes` folds, one second more does not. A window
/// too long to represent as a duration contains every later passing.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use toll_fee_core_rs::core::time::within_window;
///
/// let day = NaiveDate::from_ymd_opt(2013, 2, 7).unwrap();
/// let six = day.and_hms_opt(6, 0, 0).unwrap();
/// assert!(within_window(six, day.and_hms_opt(7, 0, 0).unwrap(), 60));
/// assert!(!within_window(six, day.and_hms_opt(7, 0, 1).unwrap(), 60));
/// ```
pub fn within_window(previous: NaiveDateTime, current: NaiveDateTime, window_minutes: i64) -> bool {
    match Duration::try_minutes(window_minutes) {
        Some(window) => current.signed_duration_since(previous) <= window,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 2, 7)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_minute_of_day_last_minute() {
        assert_eq!(minute_of_day(23, 59), MINUTES_PER_DAY - 1);
    }

    #[test]
    fn test_passing_minute_of_day_ignores_seconds() {
        assert_eq!(passing_minute_of_day(&at(8, 29, 59)), 8 * 60 + 29);
    }

    #[test]
    fn test_minutes_between_truncates() {
        assert_eq!(minutes_between(at(6, 0, 0), at(7, 0, 30)), 60);
        assert_eq!(minutes_between(at(6, 0, 0), at(6, 0, 0)), 0);
    }

    #[test]
    fn test_within_window_counts_seconds() {
        // 60m30s truncates to 60 whole minutes but is still outside the window
        assert!(!within_window(at(6, 0, 0), at(7, 0, 30), 60));
    }

    #[test]
    fn test_within_window_unrepresentable_length() {
        assert!(within_window(at(6, 0, 0), at(23, 59, 0), i64::MAX));
        assert!(!within_window(at(6, 0, 0), at(6, 0, 1), -5));
    }
}
