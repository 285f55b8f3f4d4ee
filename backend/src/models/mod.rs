//! Domain models for the toll fee calculator

pub mod vehicle;

// Re-exports
pub use vehicle::Vehicle;
