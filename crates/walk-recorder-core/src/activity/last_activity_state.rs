use crate::ActivityType;

use serde::{Deserialize, Serialize};

/// Most recent tracked activity, persisted across restarts.
///
/// Only moves along `Still -> Walking` and `Walking -> Still` once a
/// baseline has been established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastActivityState {
    /// No baseline observed yet.
    #[default]
    Unset,
    /// Last tracked activity was STILL.
    Still,
    /// Last tracked activity was WALKING.
    Walking,
}

impl LastActivityState {
    /// Map a classifier label onto a trackable state.
    ///
    /// Returns `None` for labels the monitor does not track.
    pub fn from_activity(activity: ActivityType) -> Option<Self> {
        match activity {
            ActivityType::Still => Some(Self::Still),
            ActivityType::Walking => Some(Self::Walking),
            ActivityType::Other => None,
        }
    }
}
