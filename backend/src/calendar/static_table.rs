//! Static holiday table
//!
//! Toll-free dates hardcoded for a single reference year. Outside that year
//! only weekends are toll-free.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::{CalendarError, TollFreeCalendar};
use crate::core::time::is_weekend;

/// Swedish toll-free dates for 2013 as (month, day); July is handled as a month
const SWEDEN_2013_HOLIDAYS: [(u32, u32); 16] = [
    (1, 1),
    (3, 28),
    (3, 29),
    (4, 1),
    (4, 30),
    (5, 1),
    (5, 8),
    (5, 9),
    (6, 5),
    (6, 6),
    (6, 21),
    (11, 1),
    (12, 24),
    (12, 25),
    (12, 26),
    (12, 31),
];

/// Holiday table scoped to one year
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use toll_fee_core_rs::calendar::{StaticHolidayCalendar, TollFreeCalendar};
///
/// let calendar = StaticHolidayCalendar::sweden_2013();
///
/// // Maundy Thursday 2013
/// let holiday = NaiveDate::from_ymd_opt(2013, 3, 28).unwrap();
/// assert_eq!(calendar.is_toll_free_day(holiday), Ok(true));
///
/// // Same date a year later is an ordinary Friday
/// let ordinary = NaiveDate::from_ymd_opt(2014, 3, 28).unwrap();
/// assert_eq!(calendar.is_toll_free_day(ordinary), Ok(false));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticHolidayCalendar {
    /// The only year the table applies to
    pub year: i32,

    /// Individual toll-free dates
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,

    /// Months (1-12) that are toll-free in full
    #[serde(default)]
    pub toll_free_months: Vec<u32>,
}

impl StaticHolidayCalendar {
    pub fn new(year: i32, holidays: Vec<NaiveDate>, toll_free_months: Vec<u32>) -> Self {
        Self {
            year,
            holidays,
            toll_free_months,
        }
    }

    /// The 2013 Swedish table, July included
    pub fn sweden_2013() -> Self {
        let holidays = SWEDEN_2013_HOLIDAYS
            .iter()
            .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(2013, month, day))
            .collect();
        Self::new(2013, holidays, vec![7])
    }

    /// Whether `date` is listed by the table (weekends not considered)
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        date.year() == self.year
            && (self.toll_free_months.contains(&date.month()) || self.holidays.contains(&date))
    }

    /// Check every entry belongs to the reference year
    pub fn validate(&self) -> Result<(), String> {
        if let Some(month) = self.toll_free_months.iter().find(|m| !(1..=12).contains(*m)) {
            return Err(format!("toll-free month {} is not in 1-12", month));
        }
        if let Some(date) = self.holidays.iter().find(|d| d.year() != self.year) {
            return Err(format!(
                "holiday {} is outside reference year {}",
                date, self.year
            ));
        }
        Ok(())
    }
}

impl Default for StaticHolidayCalendar {
    fn default() -> Self {
        Self::sweden_2013()
    }
}

impl TollFreeCalendar for StaticHolidayCalendar {
    fn is_toll_free_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        Ok(is_weekend(date) || self.is_holiday(date))
    }
}
