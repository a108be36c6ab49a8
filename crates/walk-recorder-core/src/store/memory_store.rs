use crate::{CoreError, CoreResult, LastActivityState, StateStore, StoredState};

use std::{
    panic::Location,
    sync::{Mutex, MutexGuard},
};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoredState>,
}

impl MemoryStore {
    /// Create a store pre-populated with `state`.
    pub fn with_state(state: StoredState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Copy of the current contents.
    #[track_caller]
    pub fn snapshot(&self) -> CoreResult<StoredState> {
        Ok(*self.lock()?)
    }

    #[track_caller]
    fn lock(&self) -> CoreResult<MutexGuard<'_, StoredState>> {
        self.state.lock().map_err(|e| CoreError::StorageError {
            reason: format!("Memory store lock poisoned: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl StateStore for MemoryStore {
    fn last_activity(&self) -> CoreResult<LastActivityState> {
        Ok(self.lock()?.last_activity)
    }

    fn set_last_activity(&self, state: LastActivityState) -> CoreResult<()> {
        self.lock()?.last_activity = state;
        Ok(())
    }

    fn last_recorded_at(&self) -> CoreResult<Option<DateTime<Utc>>> {
        Ok(self.lock()?.last_recorded_at)
    }

    fn set_last_recorded_at(&self, at: DateTime<Utc>) -> CoreResult<()> {
        self.lock()?.last_recorded_at = Some(at);
        Ok(())
    }
}
