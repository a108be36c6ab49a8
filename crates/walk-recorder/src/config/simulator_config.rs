use crate::config::default_update_interval_ms;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Delay between classifier updates in milliseconds.
    #[serde(default = "default_update_interval_ms")]
    pub update_interval_ms: u64,
}

impl SimulatorConfig {
    /// Update interval as a `Duration`.
    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: default_update_interval_ms(),
        }
    }
}
