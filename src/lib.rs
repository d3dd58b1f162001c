//! # Crossroad Monitor
//!
//! A bounded vehicle registry with a finite-state monitoring controller.
//!
//! ## Design Principles
//!
//! - **Fixed-capacity pool**: every slot is pre-allocated; acquire and
//!   release are O(1) through a free list
//! - **Dual intrusive indices**: per-category (insertion order) and
//!   global alphabetical views over the same live slots
//! - **Four-state controller**: Init, Active, Error, Stopped gate which
//!   signals are accepted
//! - **Pull-based auto-reset**: the deadline only fires when a caller
//!   polls or delivers a signal; there is no background timer
//!
//! ## Architecture
//!
//! ```text
//! [Sensor Signals] --> [TrafficMonitor (mutex)] --> [Controller]
//!                                                       |
//!                                      [VehiclePool + VehicleRegistry]
//! ```

pub mod config;
mod controller;
pub mod list;
pub mod monitor;
pub mod pool;
pub mod registry;
pub mod signal;

// Re-exports for convenience
pub use config::{ConfigError, ExhaustionPolicy, MonitorConfig, DEFAULT_CAPACITY};
pub use list::VehicleList;
pub use monitor::TrafficMonitor;
pub use pool::{Hook, SlotIndex, VehiclePool, VehicleSlot, NULL_INDEX};
pub use registry::VehicleRegistry;
pub use signal::{MonitorState, Signal, VehicleCategory, CATEGORIES};
