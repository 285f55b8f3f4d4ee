//! Toll Fee Core - Rust Engine
//!
//! Daily road-toll fee calculation for a single vehicle.
//!
//! # Architecture
//!
//! - **core**: Clock and calendar helpers for passings
//! - **models**: Domain types (Vehicle)
//! - **fees**: Time-of-day fee schedule, daily cap, window length
//! - **calendar**: Toll-free day strategies (static table, holiday provider)
//! - **calculator**: Fee aggregation over a day's passings
//! - **config**: Serde configuration and calculator builder
//!
//! # Critical Invariants
//!
//! 1. All fees are u32 whole currency units, never negative
//! 2. A day's total never exceeds the daily cap (60 by default)
//! 3. Calculation is a pure function of its inputs and the calendar

// Module declarations
pub mod calculator;
pub mod calendar;
pub mod config;
pub mod core;
pub mod fees;
pub mod models;

// Re-exports for convenience
pub use calculator::{DailyFee, PassingFee, TollCalculator, TollError, TollRequest};
pub use calendar::{
    CalendarError, DynamicCalendarConfig, DynamicHolidayCalendar, HolidayLookupError,
    HolidayProvider, StaticHolidayCalendar, TollFreeCalendar,
};
pub use config::{CalendarConfig, ConfigError, TollConfig};
pub use fees::{fee_for_time, FeeBand, FeeSchedule, DAILY_CAP};
pub use models::Vehicle;
