//! TOML-file backed state store.
//!
//! Every read goes to disk and every write rewrites the whole file using a
//! temp file + rename, so a crash mid-write leaves the previous contents.

use crate::{CoreError, CoreResult, LastActivityState, StateStore, StoredState};

use std::{
    fs,
    io::Write,
    panic::Location,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Durable store persisted as a small TOML file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store at `path`. The file is created on first write.
    #[track_caller]
    #[instrument]
    pub fn open(path: impl AsRef<Path> + std::fmt::Debug) -> CoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CoreError::StorageError {
                    reason: format!("Failed to create state directory {:?}: {}", parent, e),
                    location: ErrorLocation::from(Location::caller()),
                })?;
                debug!(state_dir = ?parent, "Created state directory");
            }
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, defaults when it does not exist yet.
    #[track_caller]
    pub fn load(&self) -> CoreResult<StoredState> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| CoreError::StorageError {
            reason: format!("Failed to read state file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        toml::from_str(&contents).map_err(|e| CoreError::StorageError {
            reason: format!("Failed to parse state file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn update(&self, apply: impl FnOnce(&mut StoredState)) -> CoreResult<()> {
        let _guard = self.write_lock.lock().map_err(|e| CoreError::StorageError {
            reason: format!("State file lock poisoned: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let mut state = self.load()?;
        apply(&mut state);
        self.write(&state)
    }

    #[track_caller]
    fn write(&self, state: &StoredState) -> CoreResult<()> {
        let contents = toml::to_string_pretty(state).map_err(|e| CoreError::StorageError {
            reason: format!("Failed to serialize state: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let temp_path = self.path.with_extension("toml.tmp");

        let mut temp_file = fs::File::create(&temp_path).map_err(|e| CoreError::StorageError {
            reason: format!("Failed to create temp state file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        temp_file
            .write_all(contents.as_bytes())
            .map_err(|e| CoreError::StorageError {
                reason: format!("Failed to write temp state file: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        temp_file.sync_all().map_err(|e| CoreError::StorageError {
            reason: format!("Failed to sync temp state file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| CoreError::StorageError {
            reason: format!("Failed to rename temp state file: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        debug!(state_path = ?self.path, "State saved");

        Ok(())
    }
}

impl StateStore for FileStore {
    fn last_activity(&self) -> CoreResult<LastActivityState> {
        Ok(self.load()?.last_activity)
    }

    fn set_last_activity(&self, state: LastActivityState) -> CoreResult<()> {
        self.update(|stored| stored.last_activity = state)
    }

    fn last_recorded_at(&self) -> CoreResult<Option<DateTime<Utc>>> {
        Ok(self.load()?.last_recorded_at)
    }

    fn set_last_recorded_at(&self, at: DateTime<Utc>) -> CoreResult<()> {
        self.update(|stored| stored.last_recorded_at = Some(at))
    }
}
