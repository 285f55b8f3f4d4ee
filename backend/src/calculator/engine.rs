//! Toll calculator engine
//!
//! The walk over a day's passings is a small state machine: the state is
//! (running total, previous passing fee, previous passing time), seeded by
//! the first passing. Every later passing either folds into the window of
//! the previous one or opens a new window. The daily cap is applied once
//! at the end.

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::calendar::{CalendarError, StaticHolidayCalendar, TollFreeCalendar};
use crate::core::time::{minutes_between, within_window};
use crate::fees::FeeSchedule;
use crate::models::Vehicle;

/// Errors returned by the toll calculator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TollError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// One vehicle's passings for one day, as received from a caller
///
/// The vehicle is optional here so that a request missing it can be
/// rejected with [`TollError::InvalidArgument`] instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TollRequest {
    #[serde(default)]
    pub vehicle: Option<Vehicle>,

    /// Chronologically ordered passings within one calendar day
    #[serde(default)]
    pub passings: Vec<NaiveDateTime>,
}

/// A single step of the daily fee walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassingFee {
    pub timestamp: NaiveDateTime,

    /// Fee of this passing on its own (0 on toll-free days/vehicles)
    pub raw_fee: u32,

    /// Whole minutes since the previous passing, `None` for the first one
    pub minutes_since_previous: Option<i64>,

    /// True if this passing opened a new window
    pub new_window: bool,

    /// Running total after this passing, before the cap
    pub running_total: u32,
}

/// Full outcome of a day's fee calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFee {
    pub passings: Vec<PassingFee>,

    /// Sum before the daily cap
    pub uncapped_total: u32,

    /// Amount billed
    pub total: u32,
}

impl DailyFee {
    /// Whether the daily cap reduced the bill
    pub fn is_capped(&self) -> bool {
        self.total < self.uncapped_total
    }

    /// Number of rolling windows the passings formed
    pub fn window_count(&self) -> usize {
        self.passings.iter().filter(|p| p.new_window).count()
    }
}

/// Daily toll fee calculator
///
/// Immutable after construction; one instance can serve any number of
/// vehicles and days, from several threads at once.
pub struct TollCalculator {
    schedule: FeeSchedule,
    calendar: Box<dyn TollFreeCalendar>,
}

impl Default for TollCalculator {
    /// Reference fee table with the static 2013 holiday calendar
    fn default() -> Self {
        Self::new(FeeSchedule::default(), StaticHolidayCalendar::sweden_2013())
    }
}

impl std::fmt::Debug for TollCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TollCalculator")
            .field("schedule", &self.schedule)
            .finish_non_exhaustive()
    }
}

impl TollCalculator {
    /// Create a calculator from a schedule and a toll-free calendar
    pub fn new(schedule: FeeSchedule, calendar: impl TollFreeCalendar + 'static) -> Self {
        Self::from_boxed(schedule, Box::new(calendar))
    }

    pub fn from_boxed(schedule: FeeSchedule, calendar: Box<dyn TollFreeCalendar>) -> Self {
        Self { schedule, calendar }
    }

    pub fn schedule(&self) -> &FeeSchedule {
        &self.schedule
    }

    /// Fee for a single passing, ignoring every other passing that day
    ///
    /// Toll-free vehicles short-circuit before the calendar is consulted, so
    /// they never trigger a holiday lookup.
    pub fn fee_for_passing(
        &self,
        vehicle: &Vehicle,
        timestamp: NaiveDateTime,
    ) -> Result<u32, TollError> {
        if vehicle.is_toll_free() || self.calendar.is_toll_free_day(timestamp.date())? {
            return Ok(0);
        }
        Ok(self
            .schedule
            .fee_for_time(timestamp.hour(), timestamp.minute()))
    }

    /// Total fee for one vehicle's passings on one day
    ///
    /// # Arguments
    /// * `vehicle` - Vehicle that made the passings
    /// * `passings` - Timestamps of one calendar day in chronological order
    ///
    /// # Returns
    /// The billed amount, between 0 and the daily cap
    pub fn total_fee(
        &self,
        vehicle: &Vehicle,
        passings: &[NaiveDateTime],
    ) -> Result<u32, TollError> {
        self.breakdown(vehicle, passings).map(|daily| daily.total)
    }

    /// Validate a caller request and compute its total
    ///
    /// # Errors
    /// [`TollError::InvalidArgument`] if the request names no vehicle.
    pub fn calculate(&self, request: &TollRequest) -> Result<u32, TollError> {
        let vehicle = request
            .vehicle
            .as_ref()
            .ok_or_else(|| TollError::InvalidArgument("vehicle is required".to_string()))?;
        self.total_fee(vehicle, &request.passings)
    }

    /// Walk the passings and record how every one contributed
    pub fn breakdown(
        &self,
        vehicle: &Vehicle,
        passings: &[NaiveDateTime],
    ) -> Result<DailyFee, TollError> {
        let mut steps = Vec::with_capacity(passings.len());
        let mut total: u32 = 0;
        let mut previous: Option<(NaiveDateTime, u32)> = None;

        for &timestamp in passings {
            let raw_fee = self.fee_for_passing(vehicle, timestamp)?;
            trace!(%timestamp, raw_fee, "Passing fee");

            let (new_window, minutes_since_previous) = match previous {
                None => {
                    total = raw_fee;
                    (true, None)
                }
                Some((previous_time, previous_fee)) => {
                    let gap = minutes_between(previous_time, timestamp);
                    let folds =
                        within_window(previous_time, timestamp, self.schedule.window_minutes);
                    if !folds {
                        total = total.saturating_add(raw_fee);
                        debug!(%timestamp, gap, raw_fee, total, "Window started");
                    } else if raw_fee >= previous_fee {
                        // total >= previous_fee holds after every step
                        total = (total - previous_fee).saturating_add(raw_fee);
                        debug!(%timestamp, gap, raw_fee, previous_fee, total, "Window folded");
                    }
                    (!folds, Some(gap))
                }
            };

            previous = Some((timestamp, raw_fee));
            steps.push(PassingFee {
                timestamp,
                raw_fee,
                minutes_since_previous,
                new_window,
                running_total: total,
            });
        }

        let capped = total.min(self.schedule.daily_cap);
        if capped < total {
            debug!(
                vehicle = %vehicle,
                uncapped = total,
                cap = self.schedule.daily_cap,
                "Daily cap applied"
            );
        }

        Ok(DailyFee {
            passings: steps,
            uncapped_total: total,
            total: capped,
        })
    }
}
