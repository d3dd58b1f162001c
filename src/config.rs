//! Monitor configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pool::NULL_INDEX;

/// Default pool capacity, matching the reference deployment.
pub const DEFAULT_CAPACITY: u32 = 1000;

/// What the controller does when a new vehicle id arrives and the pool
/// has no free slot. The error counter is incremented either way and the
/// signal is dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhaustionPolicy {
    /// Count the error and stay Active. Already-tracked vehicles keep
    /// being counted.
    #[default]
    CountOnly,
    /// Count the error and transition to the Error state.
    EnterError,
}

/// Construction-time configuration for a [`TrafficMonitor`].
///
/// [`TrafficMonitor`]: crate::TrafficMonitor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// Auto-reset period. The deadline is re-armed on every reset.
    pub period: Duration,
    /// Fixed slot capacity, set once at construction.
    pub capacity: u32,
    /// Behavior on pool exhaustion while Active.
    pub exhaustion_policy: ExhaustionPolicy,
}

impl MonitorConfig {
    /// Reference configuration with the given period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            capacity: DEFAULT_CAPACITY,
            exhaustion_policy: ExhaustionPolicy::default(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.is_zero() {
            return Err(ConfigError::ZeroPeriod);
        }
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.capacity >= NULL_INDEX {
            return Err(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::with_period(Duration::from_secs(60))
    }
}

/// Rejected monitor configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("auto-reset period must be non-zero")]
    ZeroPeriod,
    #[error("pool capacity must be non-zero")]
    ZeroCapacity,
    #[error("pool capacity {capacity} exceeds the maximum addressable slot index")]
    CapacityTooLarge { capacity: u32 },
}
