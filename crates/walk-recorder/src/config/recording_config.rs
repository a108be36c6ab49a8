use crate::config::default_window_secs;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Recording window configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Length of each recording window in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

impl RecordingConfig {
    /// Window length as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
        }
    }
}
