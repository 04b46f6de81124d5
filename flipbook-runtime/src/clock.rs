//! Monotonic clock over `embassy_time`

use embassy_time::Instant;
use flipbook_hal::Clock;

/// Milliseconds since this clock was created
#[derive(Debug, Clone, Copy)]
pub struct EmbassyClock {
    start: Instant,
}

impl EmbassyClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for EmbassyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis()
    }
}
