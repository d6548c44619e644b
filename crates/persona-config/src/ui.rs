use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_flip_duration_ms() -> u64 {
    700
}

fn default_tick_ms() -> u64 {
    100
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UiConfig {
    /// Full card flip animation length
    #[serde(default = "default_flip_duration_ms")]
    pub flip_duration_ms: u64,
    /// Redraw interval for the loading spinner
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl UiConfig {
    /// Delay before a deferred navigation changes the index: half the flip.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.flip_duration_ms / 2)
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: default_flip_duration_ms(),
            tick_ms: default_tick_ms(),
        }
    }
}
