use crate::{
    ActivityClassifier, ActivityTracker, ClassifierEvent, CoreError, CoreResult,
    LastActivityState, MemoryStore, StateStore, TrackingMode,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::sync::mpsc;

/// Classifier double that records calls and can be told to fail.
#[derive(Default)]
struct FakeClassifier {
    fail_subscribe: bool,
    fail_unsubscribe: bool,
    subscribed: Option<TrackingMode>,
    unsubscribed: Vec<TrackingMode>,
}

impl ActivityClassifier for FakeClassifier {
    fn subscribe(
        &mut self,
        mode: TrackingMode,
        _sink: mpsc::Sender<ClassifierEvent>,
    ) -> CoreResult<()> {
        if self.fail_subscribe {
            return Err(CoreError::SubscriptionFailed {
                reason: "service unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.subscribed = Some(mode);
        Ok(())
    }

    fn unsubscribe(&mut self, mode: TrackingMode) -> CoreResult<()> {
        if self.fail_unsubscribe {
            return Err(CoreError::UnsubscriptionFailed {
                reason: "service unavailable".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.subscribed = None;
        self.unsubscribed.push(mode);
        Ok(())
    }
}

fn tracker(classifier: FakeClassifier) -> (ActivityTracker<FakeClassifier>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let (sink, _rx) = mpsc::channel(8);
    let tracker = ActivityTracker::new(classifier, store.clone(), sink, TrackingMode::Activity);
    (tracker, store)
}

/// WHAT: Successful subscription enables tracking
/// WHY: Tracking state must reflect the live subscription
#[test]
#[allow(clippy::unwrap_used)]
fn given_disabled_when_toggling_then_subscribed_and_enabled() {
    // Given: A disabled tracker
    let (mut tracker, _store) = tracker(FakeClassifier::default());

    // When: Toggling transition mode
    let state = tracker.toggle(TrackingMode::Transition).unwrap();

    // Then: Enabled in transition mode
    assert!(state.enabled);
    assert_eq!(state.mode, TrackingMode::Transition);
    assert_eq!(tracker.classifier().subscribed, Some(TrackingMode::Transition));
}

/// WHAT: Failed subscription leaves tracking disabled
/// WHY: Failure is reported, never retried or assumed
#[test]
fn given_failing_classifier_when_toggling_then_error_and_disabled() {
    // Given: A classifier that refuses subscriptions
    let (mut tracker, _store) = tracker(FakeClassifier {
        fail_subscribe: true,
        ..FakeClassifier::default()
    });

    // When: Toggling activity mode
    let result = tracker.toggle(TrackingMode::Activity);

    // Then: Error returned, still disabled
    assert!(matches!(result, Err(CoreError::SubscriptionFailed { .. })));
    assert!(!tracker.state().enabled);
}

/// WHAT: Disabling clears the stored activity baseline
/// WHY: The next session must start from a fresh baseline
#[test]
#[allow(clippy::unwrap_used)]
fn given_enabled_when_toggling_again_then_unsubscribed_and_baseline_cleared() {
    // Given: Tracking enabled with a stored baseline
    let (mut tracker, store) = tracker(FakeClassifier::default());
    tracker.toggle(TrackingMode::Activity).unwrap();
    store.set_last_activity(LastActivityState::Walking).unwrap();

    // When: Toggling the same mode
    let state = tracker.toggle(TrackingMode::Activity).unwrap();

    // Then: Disabled, unsubscribed, baseline cleared
    assert!(!state.enabled);
    assert_eq!(tracker.classifier().unsubscribed, vec![TrackingMode::Activity]);
    assert_eq!(store.last_activity().unwrap(), LastActivityState::Unset);
}

/// WHAT: Failed unsubscription keeps tracking enabled
/// WHY: The subscription is still live as far as anyone knows
#[test]
#[allow(clippy::unwrap_used)]
fn given_failing_unsubscribe_when_disabling_then_still_enabled() {
    // Given: Tracking enabled with a classifier that refuses to unsubscribe
    let (mut tracker, _store) = tracker(FakeClassifier {
        fail_unsubscribe: true,
        ..FakeClassifier::default()
    });
    tracker.toggle(TrackingMode::Activity).unwrap();

    // When: Disabling
    let result = tracker.disable_active();

    // Then: Error, still enabled
    assert!(matches!(result, Err(CoreError::UnsubscriptionFailed { .. })));
    assert!(tracker.state().enabled);
}

/// WHAT: The baseline is cleared even when the unsubscribe fails
/// WHY: A feed that stays live must re-baseline, not signal against a stale activity
#[test]
#[allow(clippy::unwrap_used)]
fn given_walking_baseline_and_failing_unsubscribe_when_disabling_then_baseline_cleared() {
    // Given: Tracking enabled, WALKING stored, unsubscribe refused
    let (mut tracker, store) = tracker(FakeClassifier {
        fail_unsubscribe: true,
        ..FakeClassifier::default()
    });
    tracker.toggle(TrackingMode::Activity).unwrap();
    store.set_last_activity(LastActivityState::Walking).unwrap();

    // When: Disabling
    let result = tracker.disable_active();

    // Then: Disable failed but the baseline is gone
    assert!(result.is_err());
    assert!(tracker.state().enabled);
    assert_eq!(store.last_activity().unwrap(), LastActivityState::Unset);
}

/// WHAT: Disabling when already disabled does nothing
/// WHY: Shutdown disables unconditionally
#[test]
#[allow(clippy::unwrap_used)]
fn given_disabled_when_disabling_active_then_no_classifier_call() {
    let (mut tracker, _store) = tracker(FakeClassifier::default());

    let state = tracker.disable_active().unwrap();

    assert!(!state.enabled);
    assert!(tracker.classifier().unsubscribed.is_empty());
}
