use walk_recorder_core::{Recorder, RecordingSession, StopReason};

use tracing::info;

/// Recording subsystem stand-in that only logs window boundaries.
///
/// Capturing sensor data during the window is not implemented.
#[derive(Debug, Default)]
pub struct LogRecorder;

impl Recorder for LogRecorder {
    fn begin(&self, session: &RecordingSession) {
        info!(
            session_id = %session.session_id,
            started_at = %session.started_at.format("%H:%M:%S"),
            "Recording window opened"
        );
    }

    fn end(&self, session: &RecordingSession, reason: StopReason) {
        info!(
            session_id = %session.session_id,
            duration_ms = session.elapsed().as_millis(),
            reason = %reason,
            "Recording window closed"
        );
    }
}
