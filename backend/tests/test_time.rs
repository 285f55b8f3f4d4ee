//! Tests for passing time helpers

use chrono::{NaiveDate, NaiveDateTime};
use toll_fee_core_rs::core::time::{
    is_weekend, minute_of_day, minutes_between, passing_minute_of_day, within_window,
};

fn at(day: u32, h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2013, 2, day)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn test_minute_of_day() {
    assert_eq!(minute_of_day(6, 0), 360);
    assert_eq!(passing_minute_of_day(&at(7, 18, 30)), 1110);
}

#[test]
fn test_weekend_detection_over_a_week() {
    // 2013-02-04 is a Monday
    let flags: Vec<bool> = (4..=10)
        .map(|day| is_weekend(NaiveDate::from_ymd_opt(2013, 2, day).unwrap()))
        .collect();
    assert_eq!(flags, vec![false, false, false, false, false, true, true]);
}

#[test]
fn test_window_boundary() {
    let start = at(7, 6, 0);
    assert!(within_window(start, at(7, 6, 59), 60));
    assert!(within_window(start, at(7, 7, 0), 60));
    assert!(!within_window(start, at(7, 7, 1), 60));
}

#[test]
fn test_window_respects_custom_length() {
    let start = at(7, 6, 0);
    assert!(within_window(start, at(7, 6, 30), 30));
    assert!(!within_window(start, at(7, 6, 31), 30));
}

#[test]
fn test_minutes_between_across_days() {
    assert_eq!(minutes_between(at(7, 23, 0), at(8, 1, 0)), 120);
}
