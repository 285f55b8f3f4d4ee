//! Property tests for the daily fee aggregator

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use toll_fee_core_rs::calendar::{DynamicHolidayCalendar, InMemoryHolidayProvider};
use toll_fee_core_rs::{FeeSchedule, TollCalculator, Vehicle, DAILY_CAP};

/// Sorted passings on one day, given as minute offsets from midnight
fn passings_on(date: NaiveDate, mut minutes: Vec<i64>) -> Vec<NaiveDateTime> {
    minutes.sort_unstable();
    let midnight = date.and_hms_opt(0, 0, 0).unwrap();
    minutes
        .into_iter()
        .map(|m| midnight + Duration::minutes(m))
        .collect()
}

/// Any weekday in February-June 2024
fn weekday_2024() -> impl Strategy<Value = NaiveDate> {
    (0i64..150)
        .prop_map(|offset| NaiveDate::from_ymd_opt(2024, 2, 1).unwrap() + Duration::days(offset))
        .prop_filter("weekday", |d| !toll_fee_core_rs::core::time::is_weekend(*d))
}

fn vehicle() -> impl Strategy<Value = Vehicle> {
    prop::sample::select(Vehicle::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_total_within_cap(
        minutes in prop::collection::vec(0i64..1440, 0..40),
        vehicle in vehicle(),
    ) {
        let calculator = TollCalculator::default();
        let passings = passings_on(NaiveDate::from_ymd_opt(2013, 2, 7).unwrap(), minutes);
        let total = calculator.total_fee(&vehicle, &passings).unwrap();
        prop_assert!(total <= DAILY_CAP);
    }

    #[test]
    fn prop_toll_free_vehicles_pay_nothing(
        minutes in prop::collection::vec(0i64..1440, 1..20),
        vehicle in vehicle().prop_filter("toll-free", |v| v.is_toll_free()),
    ) {
        let calculator = TollCalculator::default();
        let passings = passings_on(NaiveDate::from_ymd_opt(2013, 2, 7).unwrap(), minutes);
        prop_assert_eq!(calculator.total_fee(&vehicle, &passings), Ok(0));
    }

    #[test]
    fn prop_weekend_passings_pay_nothing(
        minutes in prop::collection::vec(0i64..1440, 1..20),
        sunday in any::<bool>(),
    ) {
        let calculator = TollCalculator::default();
        let day = if sunday { 10 } else { 9 };
        let passings = passings_on(NaiveDate::from_ymd_opt(2013, 2, day).unwrap(), minutes);
        for passing in &passings {
            prop_assert_eq!(calculator.fee_for_passing(&Vehicle::Car, *passing), Ok(0));
        }
        prop_assert_eq!(calculator.total_fee(&Vehicle::Car, &passings), Ok(0));
    }

    #[test]
    fn prop_calculation_is_repeatable(
        minutes in prop::collection::vec(0i64..1440, 0..30),
    ) {
        let calculator = TollCalculator::default();
        let passings = passings_on(NaiveDate::from_ymd_opt(2013, 2, 7).unwrap(), minutes);
        prop_assert_eq!(
            calculator.total_fee(&Vehicle::Car, &passings),
            calculator.total_fee(&Vehicle::Car, &passings)
        );
    }

    #[test]
    fn prop_total_at_least_highest_single_fee(
        minutes in prop::collection::vec(0i64..1440, 1..30),
    ) {
        // Every passing's fee is either kept or replaced by a later, not lower, one
        let calculator = TollCalculator::default();
        let passings = passings_on(NaiveDate::from_ymd_opt(2013, 2, 7).unwrap(), minutes);
        let daily = calculator.breakdown(&Vehicle::Car, &passings).unwrap();
        let highest = daily.passings.iter().map(|p| p.raw_fee).max().unwrap_or(0);
        prop_assert!(daily.total >= highest.min(DAILY_CAP));
    }

    #[test]
    fn prop_dynamic_july_is_free(
        day in 1u32..=31,
        minutes in prop::collection::vec(0i64..1440, 1..10),
        year in 2020i32..2030,
    ) {
        let calendar = DynamicHolidayCalendar::sweden(InMemoryHolidayProvider::new());
        let calculator = TollCalculator::new(FeeSchedule::default(), calendar);
        let passings = passings_on(NaiveDate::from_ymd_opt(year, 7, day).unwrap(), minutes);
        prop_assert_eq!(calculator.total_fee(&Vehicle::Car, &passings), Ok(0));
    }

    #[test]
    fn prop_spaced_passings_sum_until_cap(
        date in weekday_2024(),
        count in 1usize..8,
    ) {
        // Passings 61 minutes apart from 06:00 never share a window
        let minutes: Vec<i64> = (0..count as i64).map(|i| 360 + 61 * i).collect();
        let passings = passings_on(date, minutes);
        let provider = InMemoryHolidayProvider::new()
            .with_holidays("SE", Vec::<NaiveDate>::new());
        let calculator = TollCalculator::new(
            FeeSchedule::default(),
            DynamicHolidayCalendar::sweden(provider),
        );

        let sum: u32 = passings
            .iter()
            .map(|p| calculator.fee_for_passing(&Vehicle::Car, *p).unwrap())
            .sum();
        prop_assert_eq!(
            calculator.total_fee(&Vehicle::Car, &passings),
            Ok(sum.min(DAILY_CAP))
        );
    }
}
