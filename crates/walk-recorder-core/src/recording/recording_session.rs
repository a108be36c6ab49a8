use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::time::Instant;
use uuid::Uuid;

/// An open recording window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordingSession {
    /// Unique session ID for log correlation.
    pub session_id: Uuid,
    /// Wall-clock start, for display and persistence.
    pub started_at: DateTime<Utc>,
    /// Monotonic start on the runtime clock, for measuring duration.
    pub started: Instant,
}

impl RecordingSession {
    pub(crate) fn start() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    /// Time since the window opened.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
