//! Fee Aggregator
//!
//! Combines the fee schedule, the toll-free calendar and the vehicle
//! category into the total billed for one vehicle on one day.
//!
//! # Rolling Windows
//!
//! Passings at most `window_minutes` after the previous passing share a
//! window in which only one fee is billed. Each passing is compared with the
//! fee of the passing immediately before it, not with the maximum of the
//! whole window, so a cluster of three or more passings can bill more than
//! its single highest fee.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toll_fee_core_rs::{TollCalculator, Vehicle};
//!
//! let calculator = TollCalculator::default();
//! let day = NaiveDate::from_ymd_opt(2013, 2, 7).unwrap();
//! let passings = [
//!     day.and_hms_opt(6, 0, 0).unwrap(),  // 8
//!     day.and_hms_opt(6, 20, 0).unwrap(), // 8, same window
//!     day.and_hms_opt(7, 25, 0).unwrap(), // 18, new window
//! ];
//!
//! assert_eq!(calculator.total_fee(&Vehicle::Car, &passings), Ok(26));
//! assert_eq!(calculator.total_fee(&Vehicle::Military, &passings), Ok(0));
//! ```

pub mod engine;

// Re-export public API
pub use engine::{DailyFee, PassingFee, TollCalculator, TollError, TollRequest};
