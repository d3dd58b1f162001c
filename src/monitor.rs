//! Traffic Monitor - the public, thread-safe entry point.
//!
//! One mutex guards the whole controller (state machine, pool, and both
//! indices together), acquired at every public entry point and released
//! on every exit path. Locking is deliberately coarse: every operation
//! touches pool and indices as one coherent bundle.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::config::{ConfigError, MonitorConfig};
use crate::controller::Controller;
use crate::signal::{MonitorState, Signal, VehicleCategory};

/// Thread-safe crossroad traffic monitor.
///
/// Counts and classifies vehicle-detection signals from a fixed-position
/// sensor, tracking a bounded set of distinct vehicles per monitoring
/// period. Share it between threads behind an `Arc`.
pub struct TrafficMonitor {
    inner: Mutex<Controller>,
}

impl TrafficMonitor {
    /// Create a monitor from a validated configuration.
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            inner: Mutex::new(Controller::new(&config)),
        })
    }

    /// Create a monitor with the reference configuration and the given
    /// auto-reset period.
    pub fn with_period(period: Duration) -> Result<Self, ConfigError> {
        Self::new(MonitorConfig::with_period(period))
    }

    /// Poisoning is absorbed: signal entry points never raise.
    fn lock(&self) -> MutexGuard<'_, Controller> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Begin monitoring: Init -> Active.
    pub fn start(&self) {
        self.lock().start();
    }

    /// Suspend monitoring: Active -> Stopped.
    pub fn stop(&self) {
        self.lock().stop();
    }

    /// Clear all statistics and force Active, from any state.
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Dispatch one signal of any kind.
    pub fn on_signal(&self, signal: &Signal) {
        self.lock().handle_signal(signal);
    }

    /// A vehicle was detected and classified.
    pub fn on_vehicle_signal(&self, category: VehicleCategory, id: &str) {
        self.lock().on_vehicle(category, id);
    }

    /// No detection / camera error.
    pub fn on_error_signal(&self) {
        self.lock().on_error();
    }

    /// A reset request arriving over the signal path.
    pub fn on_reset_signal(&self) {
        self.lock().reset();
    }

    /// Poll the auto-reset deadline. Callers invoke this periodically;
    /// there is no internal timer.
    pub fn check_auto_reset(&self) {
        self.lock().check_auto_reset();
    }

    pub fn current_state(&self) -> MonitorState {
        self.lock().current_state()
    }

    pub fn error_count(&self) -> u32 {
        self.lock().error_count()
    }

    /// Number of distinct vehicles tracked since the last reset.
    pub fn tracked(&self) -> u32 {
        self.lock().tracked()
    }

    /// Fixed slot capacity.
    pub fn capacity(&self) -> u32 {
        self.lock().capacity()
    }

    /// All statistics lines, alphabetical by id.
    pub fn statistics(&self) -> Vec<String> {
        self.lock().statistics()
    }

    /// Statistics lines for one category, in first-seen order.
    pub fn statistics_by(&self, category: VehicleCategory) -> Vec<String> {
        self.lock().statistics_by(category)
    }
}

impl std::fmt::Debug for TrafficMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("TrafficMonitor")
            .field("state", &inner.current_state())
            .field("error_count", &inner.error_count())
            .field("tracked", &inner.tracked())
            .field("capacity", &inner.capacity())
            .finish()
    }
}
