//! Toll-Free Calendar
//!
//! Decides whether tolls are suspended on a given date. Saturdays and
//! Sundays are always toll-free; beyond that the rules come from one of two
//! strategies behind the same [`TollFreeCalendar`] interface:
//!
//! 1. **StaticHolidayCalendar**: a fixed holiday table for one reference year
//! 2. **DynamicHolidayCalendar**: a toll-free month plus public holidays (and
//!    the day before each) fetched from a [`HolidayProvider`]
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toll_fee_core_rs::calendar::{StaticHolidayCalendar, TollFreeCalendar};
//!
//! let calendar = StaticHolidayCalendar::sweden_2013();
//! let christmas = NaiveDate::from_ymd_opt(2013, 12, 25).unwrap();
//! assert_eq!(calendar.is_toll_free_day(christmas), Ok(true));
//! ```

use chrono::NaiveDate;
use thiserror::Error;

pub mod dynamic;
pub mod provider;
pub mod static_table;

// Re-export public API
pub use dynamic::{DynamicCalendarConfig, DynamicHolidayCalendar, HolidayProvider};
pub use provider::{CachedHolidayProvider, InMemoryHolidayProvider};
pub use static_table::StaticHolidayCalendar;

/// Errors a holiday provider can report
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HolidayLookupError {
    #[error("Holiday source unavailable: {0}")]
    Unavailable(String),

    #[error("No holiday data for country '{0}'")]
    UnsupportedCountry(String),
}

/// Errors raised while deciding whether a date is toll-free
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Holiday lookup failed for {country_code} {year}: {source}")]
    HolidayLookupFailure {
        country_code: String,
        year: i32,
        #[source]
        source: HolidayLookupError,
    },
}

/// Strategy deciding which dates are toll-free
pub trait TollFreeCalendar: Send + Sync {
    /// Returns true if no fee is charged on `date`
    fn is_toll_free_day(&self, date: NaiveDate) -> Result<bool, CalendarError>;
}
