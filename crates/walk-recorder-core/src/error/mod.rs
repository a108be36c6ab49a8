use crate::tracking::TrackingMode;

use error_location::ErrorLocation;
use thiserror::Error;

/// Core errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A transition signal code outside the known set was received.
    #[error("Invalid transition signal: {code} {location}")]
    InvalidSignal {
        /// The rejected wire code.
        code: i32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Observation confidence outside 0..=100.
    #[error("Invalid confidence: {value} {location}")]
    InvalidConfidence {
        /// The rejected confidence value.
        value: u8,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Reading or writing the durable state store failed.
    #[error("Storage error: {reason} {location}")]
    StorageError {
        /// Description of the storage failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The classifier refused the subscription request.
    #[error("Subscription failed: {reason} {location}")]
    SubscriptionFailed {
        /// Description reported by the classifier.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The classifier refused the unsubscription request.
    #[error("Unsubscription failed: {reason} {location}")]
    UnsubscriptionFailed {
        /// Description reported by the classifier.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Tracking is enabled in another mode.
    #[error("Tracking already enabled in {active:?} mode, cannot toggle {requested:?} {location}")]
    ModeBusy {
        /// Mode currently subscribed.
        active: TrackingMode,
        /// Mode the caller asked to toggle.
        requested: TrackingMode,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
