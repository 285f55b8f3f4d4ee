//! Dynamic holiday calendar
//!
//! Public holidays come from an external [`HolidayProvider`] queried per
//! country and year. On top of weekends, a date is toll-free when:
//! - it falls in the configured toll-free month (July by default)
//! - it is a public holiday
//! - it is the day before a public holiday (can be disabled)
//!
//! The day-after is looked up in its own year, so December 31st consults
//! the following year's holidays.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

use super::{CalendarError, HolidayLookupError, TollFreeCalendar};
use crate::core::time::is_weekend;

/// External source of public holidays
pub trait HolidayProvider: Send + Sync {
    /// All public holidays of `country_code` in `year`
    fn get_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HashSet<NaiveDate>, HolidayLookupError>;
}

impl<P: HolidayProvider + ?Sized> HolidayProvider for Arc<P> {
    fn get_holidays(
        &self,
        country_code: &str,
        year: i32,
    ) -> Result<HashSet<NaiveDate>, HolidayLookupError> {
        (**self).get_holidays(country_code, year)
    }
}

/// Settings of the dynamic calendar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicCalendarConfig {
    /// Country whose public holidays apply (e.g., "SE")
    pub country_code: String,

    /// Month (1-12) that is toll-free in full; `None` disables the rule
    #[serde(default = "default_toll_free_month")]
    pub toll_free_month: Option<u32>,

    /// Whether the day before a public holiday is toll-free
    #[serde(default = "default_day_before_holiday")]
    pub day_before_holiday: bool,
}

fn default_toll_free_month() -> Option<u32> {
    Some(7)
}

fn default_day_before_holiday() -> bool {
    true
}

impl DynamicCalendarConfig {
    /// Config for `country_code` with July toll-free and the day-before rule on
    pub fn new(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            toll_free_month: default_toll_free_month(),
            day_before_holiday: default_day_before_holiday(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.country_code.trim().is_empty() {
            return Err("country_code must not be empty".to_string());
        }
        if let Some(month) = self.toll_free_month {
            if !(1..=12).contains(&month) {
                return Err(format!("toll-free month {} is not in 1-12", month));
            }
        }
        Ok(())
    }
}

/// Calendar backed by a holiday provider
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use toll_fee_core_rs::calendar::{
///     DynamicCalendarConfig, DynamicHolidayCalendar, InMemoryHolidayProvider, TollFreeCalendar,
/// };
///
/// let national_day = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
/// let provider = InMemoryHolidayProvider::new().with_holidays("SE", [national_day]);
/// let calendar = DynamicHolidayCalendar::new(DynamicCalendarConfig::new("SE"), provider);
///
/// let eve = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
/// assert_eq!(calendar.is_toll_free_day(national_day), Ok(true));
/// assert_eq!(calendar.is_toll_free_day(eve), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct DynamicHolidayCalendar<P> {
    config: DynamicCalendarConfig,
    provider: P,
}

impl<P: HolidayProvider> DynamicHolidayCalendar<P> {
    pub fn new(config: DynamicCalendarConfig, provider: P) -> Self {
        Self { config, provider }
    }

    /// Swedish holidays with the default rules
    pub fn sweden(provider: P) -> Self {
        Self::new(DynamicCalendarConfig::new("SE"), provider)
    }

    pub fn config(&self) -> &DynamicCalendarConfig {
        &self.config
    }

    /// Whether the provider lists `date` as a public holiday
    pub fn is_public_holiday(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let country_code = &self.config.country_code;
        let year = date.year();
        let holidays = self
            .provider
            .get_holidays(country_code, year)
            .map_err(|source| {
                warn!(country_code = %country_code, year, error = %source, "Holiday lookup failed");
                CalendarError::HolidayLookupFailure {
                    country_code: country_code.clone(),
                    year,
                    source,
                }
            })?;
        Ok(holidays.contains(&date))
    }
}

impl<P: HolidayProvider> TollFreeCalendar for DynamicHolidayCalendar<P> {
    fn is_toll_free_day(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        if is_weekend(date) || self.config.toll_free_month == Some(date.month()) {
            return Ok(true);
        }
        if self.is_public_holiday(date)? {
            return Ok(true);
        }
        match date.succ_opt() {
            Some(next) if self.config.day_before_holiday => self.is_public_holiday(next),
            _ => Ok(false),
        }
    }
}
