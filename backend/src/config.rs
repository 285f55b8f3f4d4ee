//! Calculator configuration
//!
//! `TollConfig` selects the fee schedule and the toll-free calendar strategy.
//! It deserializes from JSON; the calendar is an internally tagged enum:
//!
//! ```json
//! {
//!   "schedule": { "bands": [{ "start": "00:00:00", "fee": 0 }], "daily_cap": 60 },
//!   "calendar": { "type": "dynamic", "country_code": "SE", "toll_free_month": 7 }
//! }
//! ```
//!
//! Both sections are optional and default to the reference fee table and the
//! static 2013 calendar.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::calculator::TollCalculator;
use crate::calendar::{
    DynamicCalendarConfig, DynamicHolidayCalendar, HolidayProvider, StaticHolidayCalendar,
    TollFreeCalendar,
};
use crate::fees::{FeeSchedule, ScheduleError};

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid fee schedule: {0}")]
    InvalidSchedule(#[from] ScheduleError),

    #[error("Invalid calendar: {0}")]
    InvalidCalendar(String),

    #[error("Dynamic calendar for '{0}' needs a holiday provider")]
    MissingHolidayProvider(String),
}

/// Toll-free calendar selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CalendarConfig {
    /// Hardcoded holidays for one reference year
    Static(StaticHolidayCalendar),

    /// Holidays looked up through a provider
    Dynamic(DynamicCalendarConfig),
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig::Static(StaticHolidayCalendar::sweden_2013())
    }
}

impl CalendarConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = match self {
            CalendarConfig::Static(table) => table.validate(),
            CalendarConfig::Dynamic(config) => config.validate(),
        };
        result.map_err(ConfigError::InvalidCalendar)
    }
}

/// Complete calculator configuration
///
/// # Example
/// ```
/// use toll_fee_core_rs::config::TollConfig;
///
/// let config = TollConfig::from_json(r#"{ "schedule": {
///     "bands": [
///         { "start": "00:00:00", "fee": 0 },
///         { "start": "07:00:00", "fee": 20 },
///         { "start": "09:00:00", "fee": 0 }
///     ],
///     "daily_cap": 40
/// } }"#).unwrap();
///
/// assert_eq!(config.schedule.fee_for_time(8, 15), 20);
/// assert_eq!(config.schedule.window_minutes, 60);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TollConfig {
    #[serde(default)]
    pub schedule: FeeSchedule,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl TollConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TollConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.schedule.validate()?;
        self.calendar.validate()
    }

    /// Build a calculator from this configuration
    ///
    /// # Arguments
    /// * `provider` - Holiday source, required only by the dynamic calendar
    pub fn build(
        self,
        provider: Option<Arc<dyn HolidayProvider>>,
    ) -> Result<TollCalculator, ConfigError> {
        self.validate()?;

        let calendar: Box<dyn TollFreeCalendar> = match self.calendar {
            CalendarConfig::Static(table) => {
                debug!(year = table.year, holidays = table.holidays.len(), "Using static calendar");
                Box::new(table)
            }
            CalendarConfig::Dynamic(config) => {
                let provider = provider
                    .ok_or_else(|| ConfigError::MissingHolidayProvider(config.country_code.clone()))?;
                debug!(country_code = %config.country_code, "Using dynamic calendar");
                Box::new(DynamicHolidayCalendar::new(config, provider))
            }
        };

        Ok(TollCalculator::from_boxed(self.schedule, calendar))
    }
}
