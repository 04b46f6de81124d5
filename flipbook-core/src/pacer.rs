//! Frame pacing
//!
//! Decouples playback rate from the caller's tick rate. Ticks that arrive
//! faster than the interval are no-ops; slow ticks simply play slower.
//! There is no catch-up and no frame dropping.

/// Minimum-interval gate on a monotonic millisecond clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pacer {
    interval_ms: u64,
    last_tick_ms: u64,
}

impl Pacer {
    /// Create a gate with the given interval, last ticked at time 0
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as u64,
            last_tick_ms: 0,
        }
    }

    /// True if at least one interval has passed since the last accepted tick
    pub fn should_advance(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_tick_ms) >= self.interval_ms
    }

    /// Record an accepted tick
    pub fn mark(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
    }

    /// Check the gate and, if open, record the tick
    pub fn try_advance(&mut self, now_ms: u64) -> bool {
        if !self.should_advance(now_ms) {
            return false;
        }
        self.mark(now_ms);
        true
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn last_tick_ms(&self) -> u64 {
        self.last_tick_ms
    }
}
