use crate::{CoreError, FileStore, LastActivityState, StateStore};

use std::fs;

use chrono::{TimeZone, Utc};

/// WHAT: A missing state file reads as defaults
/// WHY: First launch has no state yet
#[test]
#[allow(clippy::unwrap_used)]
fn given_missing_file_when_reading_then_defaults() {
    // Given: A store pointing at a file that does not exist
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("state.toml")).unwrap();

    // When/Then: Reads return defaults
    assert_eq!(store.last_activity().unwrap(), LastActivityState::Unset);
    assert_eq!(store.last_recorded_at().unwrap(), None);
    assert!(!store.path().exists());
}

/// WHAT: Written values survive reopening the store
/// WHY: The last activity must survive process restarts
#[test]
#[allow(clippy::unwrap_used)]
fn given_written_state_when_reopening_then_values_persisted() {
    // Given: A store with both fields written
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state.toml");
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    {
        let store = FileStore::open(&path).unwrap();
        store.set_last_activity(LastActivityState::Walking).unwrap();
        store.set_last_recorded_at(at).unwrap();
    }

    // When: Reopening the same path
    let store = FileStore::open(&path).unwrap();

    // Then: Both fields are back and no temp file is left behind
    assert_eq!(store.last_activity().unwrap(), LastActivityState::Walking);
    assert_eq!(store.last_recorded_at().unwrap(), Some(at));
    assert!(!path.with_extension("toml.tmp").exists());
}

/// WHAT: Clearing the activity keeps the recorded time
/// WHY: Disabling tracking resets the baseline only
#[test]
#[allow(clippy::unwrap_used)]
fn given_written_state_when_clearing_activity_then_recorded_time_kept() {
    // Given: A store with both fields written
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("state.toml")).unwrap();
    let at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
    store.set_last_activity(LastActivityState::Still).unwrap();
    store.set_last_recorded_at(at).unwrap();

    // When: Clearing the activity
    store.clear_last_activity().unwrap();

    // Then: Activity unset, time kept
    assert_eq!(store.last_activity().unwrap(), LastActivityState::Unset);
    assert_eq!(store.last_recorded_at().unwrap(), Some(at));
}

/// WHAT: A corrupt state file surfaces a storage error
/// WHY: Callers log and carry on rather than trusting garbage
#[test]
#[allow(clippy::unwrap_used)]
fn given_corrupt_file_when_reading_then_storage_error() {
    // Given: A state file that is not valid TOML
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    fs::write(&path, "last_activity = [[[").unwrap();
    let store = FileStore::open(&path).unwrap();

    // When: Reading
    let result = store.last_activity();

    // Then: StorageError
    assert!(matches!(result, Err(CoreError::StorageError { .. })));
}
