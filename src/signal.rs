//! Signal and state types for the monitoring controller.
//!
//! Signals are the inputs delivered by the sensor at the crossing.
//! States are the four phases of the monitoring controller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of vehicle classifications produced by the sensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum VehicleCategory {
    Bicycle = 0,
    Car = 1,
    Scooter = 2,
}

/// All categories, in category-list order.
pub const CATEGORIES: [VehicleCategory; 3] = [
    VehicleCategory::Bicycle,
    VehicleCategory::Car,
    VehicleCategory::Scooter,
];

impl VehicleCategory {
    /// Stable display name used in statistics lines.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            VehicleCategory::Bicycle => "Bicycle",
            VehicleCategory::Car => "Car",
            VehicleCategory::Scooter => "Scooter",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One discrete input event from the sensor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Signal {
    /// A vehicle was detected and classified.
    Vehicle {
        category: VehicleCategory,
        id: String,
    },
    /// No detection / camera error.
    Empty,
    /// A reset request arriving over the signal path.
    Reset,
}

impl Signal {
    /// Convenience constructor for the detection path.
    pub fn vehicle(category: VehicleCategory, id: impl Into<String>) -> Self {
        Signal::Vehicle {
            category,
            id: id.into(),
        }
    }
}

/// The controller's current phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MonitorState {
    /// Not started yet. `start()` moves this to Active.
    Init = 0,
    /// Accepting signals and counting vehicles.
    Active = 1,
    /// Signals increment the error counter until a reset.
    Error = 2,
    /// Inactive. Signals are ignored, auto-reset is suppressed.
    Stopped = 3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(VehicleCategory::Bicycle.name(), "Bicycle");
        assert_eq!(VehicleCategory::Car.name(), "Car");
        assert_eq!(VehicleCategory::Scooter.name(), "Scooter");
        assert_eq!(VehicleCategory::Car.to_string(), "Car");
    }

    #[test]
    fn test_signal_constructor() {
        let sig = Signal::vehicle(VehicleCategory::Bicycle, "ABC-011");
        match sig {
            Signal::Vehicle { category, id } => {
                assert_eq!(category, VehicleCategory::Bicycle);
                assert_eq!(id, "ABC-011");
            }
            _ => panic!("Expected Vehicle"),
        }
    }

    #[test]
    fn test_signal_variants_distinct() {
        assert_ne!(Signal::Empty, Signal::Reset);
        assert_ne!(
            Signal::vehicle(VehicleCategory::Car, "X"),
            Signal::vehicle(VehicleCategory::Scooter, "X"),
        );
    }
}
