use crate::{ActivityType, CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Highest confidence a classifier can report.
pub(crate) const MAX_CONFIDENCE: u8 = 100;

/// A single classified activity with its confidence score.
///
/// Ephemeral: only the type of the most recent accepted observation is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityObservation {
    activity: ActivityType,
    confidence: u8,
    timestamp: DateTime<Utc>,
}

impl ActivityObservation {
    /// Create an observation, rejecting confidence above 100.
    #[track_caller]
    pub fn new(
        activity: ActivityType,
        confidence: u8,
        timestamp: DateTime<Utc>,
    ) -> CoreResult<Self> {
        if confidence > MAX_CONFIDENCE {
            return Err(CoreError::InvalidConfidence {
                value: confidence,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            activity,
            confidence,
            timestamp,
        })
    }

    /// Create an observation stamped with the current time.
    #[track_caller]
    pub fn now(activity: ActivityType, confidence: u8) -> CoreResult<Self> {
        Self::new(activity, confidence, Utc::now())
    }

    /// Classified activity.
    pub fn activity(&self) -> ActivityType {
        self.activity
    }

    /// Classifier confidence, 0 to 100.
    pub fn confidence(&self) -> u8 {
        self.confidence
    }

    /// When the classifier produced this observation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
