//! Transition monitor.
//!
//! Filters classified activity observations and raises a signal only when
//! the tracked activity flips between STILL and WALKING. The last tracked
//! activity lives in the durable store, so a restart does not re-emit a
//! transition that was already signalled.

use crate::{ActivityObservation, LastActivityState, StateStore, TransitionEvent};

use std::sync::Arc;

use tracing::{debug, info, instrument, trace, warn};

/// Observations below this confidence are ignored.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 40;

/// Decide the next tracked state for an accepted observation.
///
/// Returns the state to persist (if it changes) and the signal to emit.
/// An `Unset` baseline is recorded without a signal.
pub fn next_transition(
    last: LastActivityState,
    observed: LastActivityState,
) -> (Option<LastActivityState>, Option<TransitionEvent>) {
    match (last, observed) {
        (_, LastActivityState::Unset) => (None, None),
        (LastActivityState::Unset, observed) => (Some(observed), None),
        (last, observed) if last == observed => (None, None),
        (LastActivityState::Still, LastActivityState::Walking) => (
            Some(LastActivityState::Walking),
            Some(TransitionEvent::StartedWalking),
        ),
        (LastActivityState::Walking, LastActivityState::Still) => (
            Some(LastActivityState::Still),
            Some(TransitionEvent::StoppedWalking),
        ),
        _ => (None, None),
    }
}

/// De-duplicates classifier output into walking start/stop signals.
pub struct TransitionMonitor {
    store: Arc<dyn StateStore>,
    confidence_threshold: u8,
}

impl TransitionMonitor {
    /// Create a monitor persisting its state in `store`.
    pub fn new(store: Arc<dyn StateStore>, confidence_threshold: u8) -> Self {
        Self {
            store,
            confidence_threshold,
        }
    }

    /// Confidence below which observations are dropped.
    pub fn confidence_threshold(&self) -> u8 {
        self.confidence_threshold
    }

    /// Feed one observation, returning a signal on a STILL/WALKING flip.
    ///
    /// The new state is written before the signal is returned. A failed
    /// write is logged and the signal is still returned; the next
    /// observation retries the write.
    #[instrument(skip(self), fields(activity = %observation.activity(), confidence = observation.confidence()))]
    pub fn observe(&self, observation: &ActivityObservation) -> Option<TransitionEvent> {
        if observation.confidence() < self.confidence_threshold {
            trace!(
                threshold = self.confidence_threshold,
                "Observation below confidence threshold"
            );
            return None;
        }

        let observed = LastActivityState::from_activity(observation.activity())?;

        let last = match self.store.last_activity() {
            Ok(last) => last,
            Err(e) => {
                warn!(error = ?e, "Failed to read last activity, dropping observation");
                return None;
            }
        };

        let (next, event) = next_transition(last, observed);

        if let Some(next) = next {
            if let Err(e) = self.store.set_last_activity(next) {
                warn!(error = ?e, next = ?next, "Failed to persist last activity");
            }
        }

        match event {
            Some(event) => {
                info!(
                    event = %event,
                    at = %observation.timestamp().format("%H:%M:%S"),
                    "Activity transition"
                );
            }
            None if last == LastActivityState::Unset => {
                debug!(baseline = ?observed, "Baseline activity recorded");
            }
            None => {}
        }

        event
    }
}
