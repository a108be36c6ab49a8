use crate::{AppCommand, AppResult, SimulatedClassifier};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};
use walk_recorder_core::{
    ActivityObservation, ActivityTracker, ClassifierEvent, RecordingWindowController,
    TrackingMode, TrackingState, TransitionEvent, TransitionMonitor,
};

/// Main application state.
///
/// Classifier events flow monitor -> controller on this task. The
/// controller's window timer runs on its own task.
pub struct App {
    pub(crate) monitor: Arc<TransitionMonitor>,
    pub(crate) controller: RecordingWindowController,
    pub(crate) tracker: ActivityTracker<SimulatedClassifier>,
    pub(crate) event_rx: mpsc::Receiver<ClassifierEvent>,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) initial_mode: TrackingMode,
}

impl App {
    /// Run the main application event loop until shutdown is requested.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Walk-Recorder starting");

        // A failed subscription is reported and tracking stays disabled.
        if let Err(e) = self.toggle(self.initial_mode) {
            error!(mode = ?self.initial_mode, error = ?e, "Failed to enable tracking");
        }

        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    match cmd {
                        AppCommand::Toggle(mode) => {
                            if let Err(e) = self.toggle(mode) {
                                error!(mode = ?mode, error = ?e, "Failed to toggle tracking");
                            }
                        }
                        AppCommand::Shutdown => {
                            info!("Shutdown requested");
                            break;
                        }
                    }
                }

                Some(event) = self.event_rx.recv() => {
                    self.handle_classifier_event(event).await;
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        if let Err(e) = self.tracker.disable_active() {
            error!(error = ?e, "Failed to disable tracking");
        }

        self.controller.shutdown().await;

        info!("Walk-Recorder shut down successfully");

        Ok(())
    }

    /// Toggle tracking in `mode` and report which controls remain usable.
    #[instrument(skip(self))]
    pub(crate) fn toggle(&mut self, mode: TrackingMode) -> AppResult<TrackingState> {
        let state = self.tracker.toggle(mode)?;
        let controls = state.controls();

        info!(
            mode = ?state.mode,
            enabled = state.enabled,
            activity_control = controls.activity,
            transition_control = controls.transition,
            "Tracking state changed"
        );

        Ok(state)
    }

    async fn handle_classifier_event(&self, event: ClassifierEvent) {
        match event {
            ClassifierEvent::Activity(observation) => {
                debug!(
                    activity = %observation.activity(),
                    confidence = observation.confidence(),
                    at = %observation.timestamp().format("%H:%M:%S"),
                    "Activity"
                );

                if let Some(transition) = self.observe(observation).await {
                    self.controller.handle(transition).await;
                }
            }
            ClassifierEvent::Transition(transition) => {
                info!(
                    activity = %transition.activity,
                    kind = ?transition.kind,
                    at = %transition.timestamp.format("%H:%M:%S"),
                    "Transition"
                );
            }
        }
    }

    // The monitor reads and writes the state file, so it runs off the async workers.
    async fn observe(&self, observation: ActivityObservation) -> Option<TransitionEvent> {
        let monitor = Arc::clone(&self.monitor);

        match tokio::task::spawn_blocking(move || monitor.observe(&observation)).await {
            Ok(transition) => transition,
            Err(e) => {
                error!(error = ?e, "Transition monitor task failed");
                None
            }
        }
    }
}
