mod controller;
mod recorder;
mod recording_session;
mod timer;

pub use {
    controller::{DEFAULT_RECORDING_WINDOW, RecordingWindowController},
    recorder::{Recorder, StopReason},
    recording_session::RecordingSession,
    timer::{TimerHandle, schedule},
};
