use crate::config::default_tracking_mode;

use serde::{Deserialize, Serialize};
use walk_recorder_core::TrackingMode;

/// Classifier subscription configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Mode enabled at startup.
    #[serde(default = "default_tracking_mode")]
    pub mode: TrackingMode,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            mode: default_tracking_mode(),
        }
    }
}
