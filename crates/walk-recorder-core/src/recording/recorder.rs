use crate::RecordingSession;

use std::fmt;

/// Why a recording window closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopReason {
    /// A STOPPED_WALKING signal arrived before the window elapsed.
    StoppedWalking,
    /// The fixed window ran out.
    WindowElapsed,
    /// The controller was shut down with a session still open.
    Shutdown,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::StoppedWalking => f.write_str("stopped walking"),
            StopReason::WindowElapsed => f.write_str("window elapsed"),
            StopReason::Shutdown => f.write_str("shutdown"),
        }
    }
}

/// The recording subsystem.
///
/// Both calls are fire-and-forget: they are made while the controller holds
/// its session lock and must return promptly without blocking.
pub trait Recorder: Send + Sync + 'static {
    /// A recording window opened.
    fn begin(&self, session: &RecordingSession);

    /// A recording window closed.
    fn end(&self, session: &RecordingSession, reason: StopReason);
}
