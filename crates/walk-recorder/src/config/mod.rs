#[allow(clippy::module_inception)]
mod config;
mod monitor_config;
mod recording_config;
mod simulator_config;
mod tracking_config;

pub(crate) use {
    config::Config, monitor_config::MonitorConfig, recording_config::RecordingConfig,
    simulator_config::SimulatorConfig, tracking_config::TrackingConfig,
};

use walk_recorder_core::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_RECORDING_WINDOW, TrackingMode};

pub(crate) const DEFAULT_WINDOW_SECS: u64 = DEFAULT_RECORDING_WINDOW.as_secs();
pub(crate) const DEFAULT_UPDATE_INTERVAL_MS: u64 = 3000;

pub(crate) fn default_confidence_threshold() -> u8 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

pub(crate) fn default_window_secs() -> u64 {
    DEFAULT_WINDOW_SECS
}

pub(crate) fn default_tracking_mode() -> TrackingMode {
    TrackingMode::Activity
}

pub(crate) fn default_update_interval_ms() -> u64 {
    DEFAULT_UPDATE_INTERVAL_MS
}
