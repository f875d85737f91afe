// clock.rs - Fixed-cadence step clock driven by display frames

use std::time::Duration;

pub const DEFAULT_STEP_INTERVAL: Duration = Duration::from_millis(50);
pub const MIN_STEP_INTERVAL: Duration = Duration::from_millis(1);
pub const MAX_STEP_INTERVAL: Duration = Duration::from_millis(2000);

/// Decides, per display frame, whether the automaton is due a transition.
/// Frames arrive as often as the display likes; steps never come closer
/// together than `interval`.
#[derive(Debug, Clone)]
pub struct StepClock {
    interval: Duration,
    last_step: Duration,
    pub is_running: bool,
}

impl StepClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL),
            last_step: Duration::ZERO,
            is_running: true,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_STEP_INTERVAL, MAX_STEP_INTERVAL);
    }

    /// Called once per frame with the frame's monotonic timestamp. Returns
    /// true, and restarts the interval from `now`, when a step is due.
    pub fn frame(&mut self, now: Duration) -> bool {
        if !self.is_running { return false; }
        if now.saturating_sub(self.last_step) < self.interval { return false; }
        self.last_step = now;
        true
    }

    /// Restart the interval from `now` (used when resuming so the first
    /// step after a pause is not immediate).
    pub fn restart(&mut self, now: Duration) {
        self.last_step = now;
    }
}

impl Default for StepClock {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_INTERVAL)
    }
}
