//! Fee Schedule
//!
//! This module provides:
//! - The reference time-of-day fee table (`fee_for_time`)
//! - A configurable schedule with daily cap and window length (`FeeSchedule`)

pub mod schedule;

// Re-exports
pub use schedule::{fee_for_time, FeeBand, FeeSchedule, ScheduleError, DAILY_CAP, WINDOW_MINUTES};
