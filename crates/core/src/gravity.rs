//! Gravity clock - decides when the driver should run a gravity step.
//!
//! The engine has no notion of time. The driver owns a [`Gravity`] and asks
//! it every frame whether a step is due, passing a monotonic millisecond
//! timestamp.

use crate::types::FALL_INTERVAL_MS;

#[derive(Debug, Clone)]
pub struct Gravity {
    interval_ms: u64,
    last_fall_ms: u64,
}

impl Gravity {
    /// Create a gravity clock that last fired at `now_ms`.
    pub fn new(interval_ms: u64, now_ms: u64) -> Self {
        Self {
            interval_ms,
            last_fall_ms: now_ms,
        }
    }

    /// Whether a gravity step is due at `now_ms`.
    ///
    /// Fires once the elapsed time strictly exceeds the interval, then re-arms
    /// from `now_ms`. Time going backwards never fires.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_fall_ms) > self.interval_ms {
            self.last_fall_ms = now_ms;
            return true;
        }
        false
    }

    /// Milliseconds until the next step could fire.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_fall_ms);
        (self.interval_ms + 1).saturating_sub(elapsed)
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(FALL_INTERVAL_MS as u64, 0)
    }
}
