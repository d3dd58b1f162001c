//! Monitoring Controller - the four-state signal-gating core.
//!
//! Implements the dispatch protocol: every signal first gives the
//! auto-reset deadline a chance to fire, then branches on the current
//! state. Runs unlocked; [`TrafficMonitor`](crate::TrafficMonitor) wraps
//! one controller behind a mutex.

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::{ExhaustionPolicy, MonitorConfig};
use crate::pool::VehiclePool;
use crate::registry::VehicleRegistry;
use crate::signal::{MonitorState, Signal, VehicleCategory};

/// The state machine plus the state it guards: pool, both indices, the
/// error counter, and the reset deadline. Every operation is synchronous
/// and runs to completion.
pub struct Controller {
    state: MonitorState,
    error_count: u32,
    pool: VehiclePool,
    registry: VehicleRegistry,
    period: Duration,
    next_reset: Instant,
    exhaustion_policy: ExhaustionPolicy,
}

impl Controller {
    /// Build a controller from an already-validated configuration.
    ///
    /// The deadline is armed immediately, so a poll past `period` before
    /// `start()` promotes the controller to Active.
    pub(crate) fn new(config: &MonitorConfig) -> Self {
        Self {
            state: MonitorState::Init,
            error_count: 0,
            pool: VehiclePool::new(config.capacity),
            registry: VehicleRegistry::new(),
            period: config.period,
            next_reset: Instant::now() + config.period,
            exhaustion_policy: config.exhaustion_policy,
        }
    }

    // ========================================================================
    // State transitions
    // ========================================================================

    /// Init -> Active. Ignored in every other state.
    pub fn start(&mut self) {
        if self.state == MonitorState::Init {
            self.state = MonitorState::Active;
            self.schedule_next_reset();
        }
    }

    /// Active -> Stopped. Ignored in every other state.
    pub fn stop(&mut self) {
        if self.state == MonitorState::Active {
            self.state = MonitorState::Stopped;
        }
    }

    /// Unconditional: any state -> Active. Zeroes the error counter,
    /// returns every live slot to the pool, empties both indices, and
    /// re-arms the deadline from now.
    pub fn reset(&mut self) {
        self.state = MonitorState::Active;
        self.error_count = 0;
        self.registry.clear(&mut self.pool);
        self.schedule_next_reset();
    }

    fn schedule_next_reset(&mut self) {
        self.next_reset = Instant::now() + self.period;
    }

    /// Fire the reset if the deadline has passed and the controller is
    /// not Stopped. Pull-based: nothing evaluates the deadline between
    /// calls.
    pub fn check_auto_reset(&mut self) {
        if self.state == MonitorState::Stopped {
            return;
        }
        if Instant::now() >= self.next_reset {
            info!(period_ms = self.period.as_millis() as u64, "periodic reset triggered");
            self.reset();
        }
    }

    // ========================================================================
    // Signal handling
    // ========================================================================

    /// Dispatch one signal.
    pub fn handle_signal(&mut self, signal: &Signal) {
        match signal {
            Signal::Vehicle { category, id } => self.on_vehicle(*category, id),
            Signal::Empty => self.on_error(),
            Signal::Reset => self.reset(),
        }
    }

    /// The vehicle-detection path.
    ///
    /// An empty id cannot name a vehicle; it is handled as a camera
    /// fault, exactly like an empty signal.
    pub fn on_vehicle(&mut self, category: VehicleCategory, id: &str) {
        if id.is_empty() {
            self.on_error();
            return;
        }

        self.check_auto_reset();

        match self.state {
            MonitorState::Init | MonitorState::Stopped => {}
            MonitorState::Error => {
                self.error_count += 1;
                warn!(%category, id, "vehicle signal received in Error state, not counted");
            }
            MonitorState::Active => self.track_vehicle(category, id),
        }
    }

    fn track_vehicle(&mut self, category: VehicleCategory, id: &str) {
        if let Some(index) = self.registry.find(&self.pool, category, id) {
            self.pool.get_mut(index).count += 1;
            return;
        }

        match self.pool.alloc() {
            Some(index) => {
                let slot = self.pool.get_mut(index);
                slot.category = category;
                slot.id.push_str(id);
                slot.count = 1;
                self.registry.insert(&mut self.pool, index);
            }
            None => {
                // Capacity reached: the signal is dropped, nothing
                // partial is inserted.
                self.error_count += 1;
                warn!(
                    %category,
                    id,
                    capacity = self.pool.capacity(),
                    "vehicle pool exhausted, signal dropped"
                );
                if self.exhaustion_policy == ExhaustionPolicy::EnterError {
                    self.state = MonitorState::Error;
                }
            }
        }
    }

    /// The no-detection / camera-error path.
    pub fn on_error(&mut self) {
        self.check_auto_reset();

        match self.state {
            MonitorState::Init | MonitorState::Stopped => {}
            MonitorState::Active => {
                self.error_count += 1;
                self.state = MonitorState::Error;
            }
            MonitorState::Error => {
                self.error_count += 1;
                warn!("empty signal received while already in Error state");
            }
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    pub fn current_state(&self) -> MonitorState {
        self.state
    }

    #[inline]
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    /// Number of distinct vehicles tracked since the last reset.
    #[inline]
    pub fn tracked(&self) -> u32 {
        self.registry.len()
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.pool.capacity()
    }

    /// All statistics lines, alphabetical by id.
    pub fn statistics(&self) -> Vec<String> {
        self.registry.statistics(&self.pool)
    }

    /// Statistics lines for one category, in first-seen order.
    pub fn statistics_by(&self, category: VehicleCategory) -> Vec<String> {
        self.registry.statistics_by(&self.pool, category)
    }
}
