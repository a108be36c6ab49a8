//! Scripted stand-in for the platform activity classifier.
//!
//! Emits a fixed looping sequence of observations (activity mode) or
//! ENTER/EXIT transitions (transition mode) on a timer, so the monitor and
//! controller can be exercised without sensors.

use walk_recorder_core::{
    ActivityClassifier, ActivityObservation, ActivityType, ClassifierEvent, CoreError, CoreResult,
    PlatformTransition, PlatformTransitionKind, TrackingMode,
};

use std::{panic::Location, time::Duration};

use chrono::Utc;
use error_location::ErrorLocation;
use tokio::{runtime::Handle, sync::mpsc, task::JoinHandle};
use tracing::{debug, instrument, warn};

/// One classifier update per entry, looped.
///
/// Covers a baseline, a low-confidence reading, an unrelated activity, a
/// short walk stopped early, and a long walk that outlasts a 30 second
/// window at the default 3 second interval.
pub(crate) const ACTIVITY_SCRIPT: &[(ActivityType, u8)] = &[
    (ActivityType::Still, 92),
    (ActivityType::Still, 88),
    (ActivityType::Walking, 35),
    (ActivityType::Walking, 81),
    (ActivityType::Walking, 90),
    (ActivityType::Other, 70),
    (ActivityType::Walking, 86),
    (ActivityType::Still, 77),
    (ActivityType::Still, 95),
    (ActivityType::Walking, 84),
    (ActivityType::Walking, 88),
    (ActivityType::Walking, 91),
    (ActivityType::Walking, 87),
    (ActivityType::Walking, 93),
    (ActivityType::Walking, 89),
    (ActivityType::Walking, 90),
    (ActivityType::Walking, 85),
    (ActivityType::Walking, 92),
    (ActivityType::Walking, 88),
    (ActivityType::Walking, 90),
    (ActivityType::Still, 90),
    (ActivityType::Still, 91),
];

pub(crate) const TRANSITION_SCRIPT: &[(ActivityType, PlatformTransitionKind)] = &[
    (ActivityType::Still, PlatformTransitionKind::Exit),
    (ActivityType::Walking, PlatformTransitionKind::Enter),
    (ActivityType::Walking, PlatformTransitionKind::Exit),
    (ActivityType::Still, PlatformTransitionKind::Enter),
];

/// Activity classifier fed from a fixed script.
#[derive(Debug)]
pub struct SimulatedClassifier {
    update_interval: Duration,
    feed: Option<(TrackingMode, JoinHandle<()>)>,
}

impl SimulatedClassifier {
    /// Create an unsubscribed classifier.
    pub fn new(update_interval: Duration) -> Self {
        Self {
            update_interval,
            feed: None,
        }
    }

    /// Mode of the live subscription, if any.
    pub fn active_mode(&self) -> Option<TrackingMode> {
        self.feed.as_ref().map(|(mode, _)| *mode)
    }
}

impl ActivityClassifier for SimulatedClassifier {
    #[track_caller]
    #[instrument(skip(self, sink))]
    fn subscribe(
        &mut self,
        mode: TrackingMode,
        sink: mpsc::Sender<ClassifierEvent>,
    ) -> CoreResult<()> {
        if let Some(active) = self.active_mode() {
            return Err(CoreError::SubscriptionFailed {
                reason: format!("Already subscribed in {:?} mode", active),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let runtime = Handle::try_current().map_err(|e| CoreError::SubscriptionFailed {
            reason: format!("No async runtime: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let interval = self.update_interval;
        let handle = runtime.spawn(run_feed(mode, interval, sink));
        self.feed = Some((mode, handle));

        debug!(mode = ?mode, interval_ms = interval.as_millis(), "Simulated feed started");

        Ok(())
    }

    #[track_caller]
    #[instrument(skip(self))]
    fn unsubscribe(&mut self, mode: TrackingMode) -> CoreResult<()> {
        match self.feed.take() {
            Some((active, handle)) if active == mode => {
                handle.abort();
                debug!(mode = ?mode, "Simulated feed stopped");
                Ok(())
            }
            Some(feed) => {
                let active = feed.0;
                self.feed = Some(feed);
                Err(CoreError::UnsubscriptionFailed {
                    reason: format!("Subscribed in {:?} mode, not {:?}", active, mode),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            None => Err(CoreError::UnsubscriptionFailed {
                reason: "Not subscribed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl Drop for SimulatedClassifier {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.feed.take() {
            handle.abort();
        }
    }
}

async fn run_feed(mode: TrackingMode, interval: Duration, sink: mpsc::Sender<ClassifierEvent>) {
    let mut ticker = tokio::time::interval(interval);

    for step in 0usize.. {
        ticker.tick().await;

        let event = match mode {
            TrackingMode::Activity => {
                let (activity, confidence) = ACTIVITY_SCRIPT[step % ACTIVITY_SCRIPT.len()];
                match ActivityObservation::now(activity, confidence) {
                    Ok(observation) => ClassifierEvent::Activity(observation),
                    Err(e) => {
                        warn!(error = ?e, "Skipping invalid scripted observation");
                        continue;
                    }
                }
            }
            TrackingMode::Transition => {
                let (activity, kind) = TRANSITION_SCRIPT[step % TRANSITION_SCRIPT.len()];
                ClassifierEvent::Transition(PlatformTransition {
                    activity,
                    kind,
                    timestamp: Utc::now(),
                })
            }
        };

        if sink.send(event).await.is_err() {
            debug!("Classifier sink closed, stopping feed");
            break;
        }
    }
}
