#![cfg(feature = "std")]

use std::time::Duration;

use crate::core::config::DEFAULT_AI_DELAY_MS;

/// Runtime knobs of the drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Pause before the computer opponent fires. Cosmetic only.
    pub ai_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_delay: Duration::from_millis(DEFAULT_AI_DELAY_MS),
        }
    }
}

impl Settings {
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }
}
