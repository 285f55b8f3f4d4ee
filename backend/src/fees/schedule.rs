//! Time-of-Day Fee Schedule
//!
//! Defines the fee charged for a single passing depending on the local time
//! of day, plus the daily cap and rolling-window length applied by the fee
//! aggregator. All fees are whole currency units.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::time::{minute_of_day, MINUTES_PER_DAY};

/// Maximum total billable to one vehicle in one day
pub const DAILY_CAP: u32 = 60;

/// Length of the rolling window in minutes
pub const WINDOW_MINUTES: i64 = 60;

/// Reference table as (hour, minute, fee), each band running until the next
const STANDARD_BANDS: [(u32, u32, u32); 11] = [
    (0, 0, 0),
    (6, 0, 8),
    (6, 30, 13),
    (7, 0, 18),
    (8, 0, 13),
    (8, 30, 8),
    (15, 0, 13),
    (15, 30, 18),
    (17, 0, 13),
    (18, 0, 8),
    (18, 30, 0),
];

/// Fee for a passing at `hour:minute` under the reference table
///
/// # Arguments
/// * `hour` - Hour of day (0-23)
/// * `minute` - Minute of hour (0-59)
///
/// # Returns
/// The fee for a single passing, one of 0, 8, 13 or 18
///
/// # Example
/// ```
/// use toll_fee_core_rs::fees::fee_for_time;
///
/// assert_eq!(fee_for_time(6, 29), 8);
/// assert_eq!(fee_for_time(7, 45), 18);
/// assert_eq!(fee_for_time(18, 30), 0);
/// ```
pub fn fee_for_time(hour: u32, minute: u32) -> u32 {
    let at = minute_of_day(hour, minute);
    STANDARD_BANDS
        .iter()
        .rev()
        .find(|(h, m, _)| minute_of_day(*h, *m) <= at)
        .map(|(_, _, fee)| *fee)
        .unwrap_or(0)
}

/// Errors found while validating a fee schedule
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Fee schedule has no bands")]
    NoBands,

    #[error("First band must start at 00:00, starts at {0}")]
    FirstBandNotMidnight(NaiveTime),

    #[error("Band starting at {current} does not come after band starting at {previous}")]
    UnorderedBands {
        previous: NaiveTime,
        current: NaiveTime,
    },

    #[error("Window length must be between 1 and {max} minutes, got {actual}")]
    InvalidWindow { actual: i64, max: i64 },
}

/// One step of the schedule: `fee` applies from `start` until the next band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBand {
    /// Inclusive start of the band (local time)
    pub start: NaiveTime,
    pub fee: u32,
}

impl FeeBand {
    fn start_minute(&self) -> u32 {
        minute_of_day(self.start.hour(), self.start.minute())
    }
}

/// Fee Schedule Configuration
///
/// `Default` reproduces the reference table with a cap of 60 and a
/// 60-minute window.
///
/// # Example
/// ```
/// use toll_fee_core_rs::fees::FeeSchedule;
///
/// let schedule = FeeSchedule::default();
/// assert_eq!(schedule.fee_for_time(15, 29), 13);
/// assert_eq!(schedule.fee_for_time(15, 30), 18);
/// assert_eq!(schedule.daily_cap, 60);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Bands ordered by start time, the first starting at midnight
    pub bands: Vec<FeeBand>,

    /// Maximum total per vehicle and day
    #[serde(default = "default_daily_cap")]
    pub daily_cap: u32,

    /// Passings at most this many minutes apart share a window
    #[serde(default = "default_window_minutes")]
    pub window_minutes: i64,
}

fn default_daily_cap() -> u32 {
    DAILY_CAP
}

fn default_window_minutes() -> i64 {
    WINDOW_MINUTES
}

impl Default for FeeSchedule {
    fn default() -> Self {
        let bands = STANDARD_BANDS
            .iter()
            .filter_map(|&(hour, minute, fee)| {
                NaiveTime::from_hms_opt(hour, minute, 0).map(|start| FeeBand { start, fee })
            })
            .collect();

        Self {
            bands,
            daily_cap: DAILY_CAP,
            window_minutes: WINDOW_MINUTES,
        }
    }
}

impl FeeSchedule {
    /// Fee for a passing at `hour:minute`
    ///
    /// Times before the first band (impossible for a validated schedule)
    /// cost nothing.
    pub fn fee_for_time(&self, hour: u32, minute: u32) -> u32 {
        let at = minute_of_day(hour, minute);
        self.bands
            .iter()
            .rev()
            .find(|band| band.start_minute() <= at)
            .map(|band| band.fee)
            .unwrap_or(0)
    }

    /// Fee for a passing at the given time of day
    pub fn fee_at(&self, time: NaiveTime) -> u32 {
        self.fee_for_time(time.hour(), time.minute())
    }

    /// Highest fee any single passing can cost
    pub fn max_fee(&self) -> u32 {
        self.bands.iter().map(|band| band.fee).max().unwrap_or(0)
    }

    /// Check the schedule is usable by the fee aggregator
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let first = self.bands.first().ok_or(ScheduleError::NoBands)?;
        if first.start_minute() != 0 {
            return Err(ScheduleError::FirstBandNotMidnight(first.start));
        }

        for pair in self.bands.windows(2) {
            if pair[1].start_minute() <= pair[0].start_minute() {
                return Err(ScheduleError::UnorderedBands {
                    previous: pair[0].start,
                    current: pair[1].start,
                });
            }
        }

        let max = i64::from(MINUTES_PER_DAY);
        if self.window_minutes < 1 || self.window_minutes > max {
            return Err(ScheduleError::InvalidWindow {
                actual: self.window_minutes,
                max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule_matches_reference_table() {
        let schedule = FeeSchedule::default();
        for hour in 0..24 {
            for minute in 0..60 {
                assert_eq!(
                    schedule.fee_for_time(hour, minute),
                    fee_for_time(hour, minute),
                    "mismatch at {:02}:{:02}",
                    hour,
                    minute
                );
            }
        }
    }

    #[test]
    fn test_default_schedule_is_valid() {
        assert_eq!(FeeSchedule::default().validate(), Ok(()));
        assert_eq!(FeeSchedule::default().max_fee(), 18);
    }

    #[test]
    fn test_validate_rejects_empty() {
        let schedule = FeeSchedule {
            bands: vec![],
            ..FeeSchedule::default()
        };
        assert_eq!(schedule.validate(), Err(ScheduleError::NoBands));
    }

    #[test]
    fn test_validate_rejects_late_first_band() {
        let start = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        let schedule = FeeSchedule {
            bands: vec![FeeBand { start, fee: 8 }],
            ..FeeSchedule::default()
        };
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::FirstBandNotMidnight(start))
        );
    }

    #[test]
    fn test_validate_rejects_unordered_bands() {
        let mut schedule = FeeSchedule::default();
        schedule.bands.swap(2, 3);
        assert!(matches!(
            schedule.validate(),
            Err(ScheduleError::UnorderedBands { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let schedule = FeeSchedule {
            window_minutes: 0,
            ..FeeSchedule::default()
        };
        assert_eq!(
            schedule.validate(),
            Err(ScheduleError::InvalidWindow {
                actual: 0,
                max: 1440
            })
        );
    }
}
