//! Walk-Recorder Core Library
//!
//! Turns a stream of classified activity observations into "started walking"
//! and "stopped walking" signals, and runs a fixed recording window for each
//! walk.
//!
//! # Example
//!
//! ```no_run
//! use walk_recorder_core::{
//!     ActivityObservation, ActivityType, CoreResult, MemoryStore, Recorder, RecordingSession,
//!     RecordingWindowController, StateStore, StopReason, TransitionMonitor,
//! };
//!
//! use std::{sync::Arc, time::Duration};
//!
//! struct NoopRecorder;
//!
//! impl Recorder for NoopRecorder {
//!     fn begin(&self, _session: &RecordingSession) {}
//!     fn end(&self, _session: &RecordingSession, _reason: StopReason) {}
//! }
//!
//! #[tokio::main]
//! async fn main() -> CoreResult<()> {
//!     let store: Arc<dyn StateStore> = Arc::new(MemoryStore::default());
//!     let monitor = TransitionMonitor::new(Arc::clone(&store), 40);
//!     let controller =
//!         RecordingWindowController::new(Arc::new(NoopRecorder), store, Duration::from_secs(30));
//!
//!     for activity in [ActivityType::Still, ActivityType::Walking] {
//!         let observation = ActivityObservation::now(activity, 90)?;
//!         if let Some(event) = monitor.observe(&observation) {
//!             controller.handle(event).await;
//!         }
//!     }
//!
//!     assert!(controller.is_recording().await);
//!     Ok(())
//! }
//! ```

mod activity;
mod error;
mod recording;
mod store;
mod tracking;
mod transition;

pub use {
    activity::{
        ActivityObservation, ActivityType, LastActivityState, PlatformTransition,
        PlatformTransitionKind,
    },
    error::CoreError,
    error::Result as CoreResult,
    recording::{
        DEFAULT_RECORDING_WINDOW, Recorder, RecordingSession, RecordingWindowController,
        StopReason, TimerHandle, schedule,
    },
    store::{FileStore, MemoryStore, StateStore, StoredState},
    tracking::{
        ActivityClassifier, ActivityTracker, ClassifierEvent, ControlAvailability, TrackingMode,
        TrackingRequest, TrackingState,
    },
    transition::{DEFAULT_CONFIDENCE_THRESHOLD, TransitionEvent, TransitionMonitor, next_transition},
};
