use crate::{ActivityObservation, CoreResult, PlatformTransition, TrackingMode};

use tokio::sync::mpsc;

/// Event delivered by the classifier once subscribed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierEvent {
    /// A classified activity (activity mode).
    Activity(ActivityObservation),
    /// A raw platform transition (transition mode).
    Transition(PlatformTransition),
}

/// External activity classification service.
///
/// Once subscribed, the classifier pushes events into `sink` until
/// unsubscribed. Neither call retries on failure.
pub trait ActivityClassifier: Send {
    /// Start delivering events for `mode`.
    fn subscribe(
        &mut self,
        mode: TrackingMode,
        sink: mpsc::Sender<ClassifierEvent>,
    ) -> CoreResult<()>;

    /// Stop delivering events for `mode`.
    fn unsubscribe(&mut self, mode: TrackingMode) -> CoreResult<()>;
}
