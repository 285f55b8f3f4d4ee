//! Vehicle classification
//!
//! Vehicles form a closed set of categories. Each category carries a type
//! label and a toll-free flag; nothing else about a vehicle affects the fee.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Vehicle category passing a toll gate
///
/// # Example
/// ```
/// use toll_fee_core_rs::Vehicle;
///
/// assert_eq!(Vehicle::Car.type_label(), "Car");
/// assert!(!Vehicle::Car.is_toll_free());
/// assert!(Vehicle::Diplomat.is_toll_free());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vehicle {
    /// Ordinary passenger car, billable
    Car,
    Motorbike,
    Tractor,
    /// Emergency services (ambulance, fire, police)
    Emergency,
    Diplomat,
    /// Vehicle registered outside the country
    Foreign,
    Military,
}

impl Vehicle {
    /// Every vehicle category, billable first
    pub const ALL: [Vehicle; 7] = [
        Vehicle::Car,
        Vehicle::Motorbike,
        Vehicle::Tractor,
        Vehicle::Emergency,
        Vehicle::Diplomat,
        Vehicle::Foreign,
        Vehicle::Military,
    ];

    /// Type label of the category
    pub fn type_label(&self) -> &'static str {
        match self {
            Vehicle::Car => "Car",
            Vehicle::Motorbike => "Motorbike",
            Vehicle::Tractor => "Tractor",
            Vehicle::Emergency => "Emergency",
            Vehicle::Diplomat => "Diplomat",
            Vehicle::Foreign => "Foreign",
            Vehicle::Military => "Military",
        }
    }

    /// Whether passings by this category are never charged
    pub fn is_toll_free(&self) -> bool {
        !matches!(self, Vehicle::Car)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_label())
    }
}
