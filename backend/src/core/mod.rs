//! Core clock and calendar helpers shared by the fee components

pub mod time;
