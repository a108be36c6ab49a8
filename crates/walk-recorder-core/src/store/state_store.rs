use crate::{CoreResult, LastActivityState};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything the durable store holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredState {
    /// Last tracked activity type.
    #[serde(default)]
    pub last_activity: LastActivityState,

    /// When the last recording window opened. Diagnostic only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_recorded_at: Option<DateTime<Utc>>,
}

/// Durable key-value storage for the two persisted fields.
///
/// Calls may block on disk I/O. The recording controller runs them on the
/// blocking pool; other async callers should do the same.
pub trait StateStore: Send + Sync {
    /// Read the last tracked activity, `Unset` when never written.
    fn last_activity(&self) -> CoreResult<LastActivityState>;

    /// Overwrite the last tracked activity.
    fn set_last_activity(&self, state: LastActivityState) -> CoreResult<()>;

    /// Forget the last tracked activity so the next observation is a baseline.
    fn clear_last_activity(&self) -> CoreResult<()> {
        self.set_last_activity(LastActivityState::Unset)
    }

    /// Read when the last recording window opened.
    fn last_recorded_at(&self) -> CoreResult<Option<DateTime<Utc>>>;

    /// Record when a recording window opened.
    fn set_last_recorded_at(&self, at: DateTime<Utc>) -> CoreResult<()>;
}
