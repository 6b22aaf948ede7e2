//! Tick timing utilities
//!
//! The transition machine is driven by per-tick wall-clock deltas supplied
//! by the host. `TickTimer` produces those deltas for hosts that run a real
//! frame loop; tests feed synthetic deltas instead.

use std::time::Instant;

/// Wall-clock delta source for a frame loop
pub struct TickTimer {
    last_tick: Instant,
    delta_secs: f32,
    total_secs: f32,
    tick_count: u64,
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TickTimer {
    /// Create a new timer; the first `tick` measures from this moment
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            delta_secs: 0.0,
            total_secs: 0.0,
            tick_count: 0,
        }
    }

    /// Advance the timer and return the seconds elapsed since the last tick
    ///
    /// Call exactly once per host frame and pass the returned delta to
    /// [`TransitionController::tick`](crate::TransitionController::tick).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_tick).as_secs_f32();
        self.total_secs += self.delta_secs;
        self.last_tick = now;
        self.tick_count += 1;
        self.delta_secs
    }

    /// Seconds elapsed between the two most recent ticks
    pub fn delta_secs(&self) -> f32 {
        self.delta_secs
    }

    /// Total seconds accumulated across all ticks
    pub fn total_secs(&self) -> f32 {
        self.total_secs
    }

    /// Number of ticks taken so far
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
