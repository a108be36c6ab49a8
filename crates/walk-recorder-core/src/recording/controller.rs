//! Recording window controller.
//!
//! Opens a fixed-length recording window on STARTED_WALKING and closes it on
//! STOPPED_WALKING or when the window elapses, whichever comes first. The
//! explicit stop and the timer expiry both take the same session lock and
//! check the state before acting, so whichever arrives second is a no-op.

use crate::{
    CoreError, CoreResult, Recorder, RecordingSession, StateStore, StopReason, TimerHandle, TransitionEvent,
    recording::schedule,
};

use std::{
    panic::Location,
    sync::{Arc, Weak},
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Length of a recording window.
pub const DEFAULT_RECORDING_WINDOW: Duration = Duration::from_secs(30);

enum WindowState {
    Idle,
    Recording {
        session: RecordingSession,
        timer: TimerHandle,
    },
}

struct Shared {
    state: Mutex<WindowState>,
    recorder: Arc<dyn Recorder>,
    store: Arc<dyn StateStore>,
    window: Duration,
}

/// Single-session recording state machine.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct RecordingWindowController {
    shared: Arc<Shared>,
}

impl RecordingWindowController {
    /// Create an idle controller.
    pub fn new(
        recorder: Arc<dyn Recorder>,
        store: Arc<dyn StateStore>,
        window: Duration,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(WindowState::Idle),
                recorder,
                store,
                window,
            }),
        }
    }

    /// Configured window length.
    pub fn window(&self) -> Duration {
        self.shared.window
    }

    /// Apply a transition signal.
    ///
    /// Returns `true` if a session was opened or closed, `false` for a no-op.
    #[instrument(skip(self))]
    pub async fn handle(&self, event: TransitionEvent) -> bool {
        self.log_last_recorded_at().await;

        match event {
            TransitionEvent::StartedWalking => self.start().await,
            TransitionEvent::StoppedWalking => self.stop(StopReason::StoppedWalking).await,
        }
    }

    /// Decode a wire code and apply it.
    ///
    /// Unknown codes are rejected without touching the session.
    #[track_caller]
    pub fn handle_signal(&self, code: i32) -> impl Future<Output = CoreResult<bool>> + '_ {
        let decoded = TransitionEvent::from_code(code);
        async move {
            let event = decoded?;
            Ok(self.handle(event).await)
        }
    }

    /// Close any open session.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> bool {
        self.stop(StopReason::Shutdown).await
    }

    /// Snapshot of the open session, if any.
    pub async fn current_session(&self) -> Option<RecordingSession> {
        match &*self.shared.state.lock().await {
            WindowState::Idle => None,
            WindowState::Recording { session, .. } => Some(*session),
        }
    }

    /// Whether a window is currently open.
    pub async fn is_recording(&self) -> bool {
        self.current_session().await.is_some()
    }

    async fn start(&self) -> bool {
        let mut state = self.shared.state.lock().await;

        if let WindowState::Recording { session, .. } = &*state {
            debug!(session_id = %session.session_id, "Already recording, ignoring start");
            return false;
        }

        let session = RecordingSession::start();
        self.shared.recorder.begin(&session);

        let weak = Arc::downgrade(&self.shared);
        let session_id = session.session_id;
        let timer = schedule(self.shared.window, move || expire(weak, session_id));

        *state = WindowState::Recording { session, timer };
        drop(state);

        let started_at = session.started_at;
        let stored = self
            .with_store(move |store| store.set_last_recorded_at(started_at))
            .await;
        if let Err(e) = stored {
            warn!(error = ?e, "Failed to persist last recorded time");
        }

        info!(
            session_id = %session.session_id,
            window_secs = self.shared.window.as_secs(),
            "Recording started"
        );

        true
    }

    async fn stop(&self, reason: StopReason) -> bool {
        let mut state = self.shared.state.lock().await;

        match std::mem::replace(&mut *state, WindowState::Idle) {
            WindowState::Idle => {
                debug!(reason = %reason, "Not recording, ignoring stop");
                false
            }
            WindowState::Recording { session, timer } => {
                timer.cancel();
                self.shared.recorder.end(&session, reason);

                info!(
                    session_id = %session.session_id,
                    duration_ms = session.elapsed().as_millis(),
                    reason = %reason,
                    "Recording stopped"
                );

                true
            }
        }
    }

    async fn log_last_recorded_at(&self) {
        match self.with_store(|store| store.last_recorded_at()).await {
            Ok(Some(at)) => debug!(last_recorded_at = %at.format("%H:%M:%S"), "Last recording"),
            Ok(None) => debug!("No previous recording"),
            Err(e) => warn!(error = ?e, "Failed to read last recorded time"),
        }
    }
}

impl RecordingWindowController {
    /// Run a store call on the blocking pool.
    async fn with_store<T, F>(&self, call: F) -> CoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn StateStore) -> CoreResult<T> + Send + 'static,
    {
        let store = Arc::clone(&self.shared.store);

        tokio::task::spawn_blocking(move || call(store.as_ref()))
            .await
            .map_err(|e| CoreError::StorageError {
                reason: format!("Store task failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
    }
}

/// Timer callback. Only closes the session the timer was armed for.
async fn expire(shared: Weak<Shared>, session_id: Uuid) {
    let Some(shared) = shared.upgrade() else {
        return;
    };

    let mut state = shared.state.lock().await;

    let matches = matches!(
        &*state,
        WindowState::Recording { session, .. } if session.session_id == session_id
    );
    if !matches {
        debug!(session_id = %session_id, "Window elapsed after session closed");
        return;
    }

    if let WindowState::Recording { session, .. } =
        std::mem::replace(&mut *state, WindowState::Idle)
    {
        shared.recorder.end(&session, StopReason::WindowElapsed);

        info!(
            session_id = %session.session_id,
            duration_ms = session.elapsed().as_millis(),
            reason = %StopReason::WindowElapsed,
            "Recording stopped"
        );
    }
}
