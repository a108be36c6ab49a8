//! Subscription lifecycle over an external activity classifier.

use crate::{
    ActivityClassifier, ClassifierEvent, CoreResult, StateStore, TrackingMode, TrackingRequest,
    TrackingState,
};

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, instrument, warn};

/// Enables and disables classifier tracking.
pub struct ActivityTracker<C: ActivityClassifier> {
    classifier: C,
    store: Arc<dyn StateStore>,
    sink: mpsc::Sender<ClassifierEvent>,
    state: TrackingState,
}

impl<C: ActivityClassifier> ActivityTracker<C> {
    /// Create a disabled tracker delivering events into `sink`.
    pub fn new(
        classifier: C,
        store: Arc<dyn StateStore>,
        sink: mpsc::Sender<ClassifierEvent>,
        mode: TrackingMode,
    ) -> Self {
        Self {
            classifier,
            store,
            sink,
            state: TrackingState {
                mode,
                enabled: false,
            },
        }
    }

    /// Current tracking state.
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Borrow the classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Enable tracking in `mode`, or disable it if `mode` is already active.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, mode: TrackingMode) -> CoreResult<TrackingState> {
        match self.state.request(mode)? {
            TrackingRequest::Enable(mode) => self.enable(mode)?,
            TrackingRequest::Disable(mode) => self.disable(mode)?,
        }

        Ok(self.state)
    }

    /// Disable whatever mode is active. No-op when already disabled.
    #[instrument(skip(self))]
    pub fn disable_active(&mut self) -> CoreResult<TrackingState> {
        if self.state.enabled {
            self.disable(self.state.mode)?;
        }

        Ok(self.state)
    }

    fn enable(&mut self, mode: TrackingMode) -> CoreResult<()> {
        self.state.mode = mode;

        match self.classifier.subscribe(mode, self.sink.clone()) {
            Ok(()) => {
                self.state.enabled = true;
                info!(mode = ?mode, "Activity tracking enabled");
                Ok(())
            }
            Err(e) => {
                error!(mode = ?mode, error = ?e, "Activity tracking could not be enabled");
                Err(e)
            }
        }
    }

    fn disable(&mut self, mode: TrackingMode) -> CoreResult<()> {
        // Cleared before unsubscribing, even if the unsubscribe then fails:
        // a still-live feed re-baselines on its next observation rather than
        // signalling against a stale activity.
        if let Err(e) = self.store.clear_last_activity() {
            warn!(error = ?e, "Failed to clear last activity");
        }

        match self.classifier.unsubscribe(mode) {
            Ok(()) => {
                self.state.enabled = false;
                info!(mode = ?mode, "Activity tracking disabled");
                Ok(())
            }
            Err(e) => {
                error!(mode = ?mode, error = ?e, "Activity tracking could not be disabled");
                Err(e)
            }
        }
    }
}
