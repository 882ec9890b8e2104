//! Durable preferences store.
//!
//! One JSON file under one fixed name. The boundary never throws: load
//! repairs or defaults, save and clear are best-effort and log failures.
//! Writes happen only in direct response to explicit user action (filter
//! changes, reset), never from passive data-loading paths.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::schema::BedTrackingPreferences;
use crate::paths;

/// Fixed file name; the `v1` suffix matches the original storage key.
pub const PREFS_FILE_NAME: &str = "bed_tracking_preferences_v1.json";

/// Internal store failures - logged at the boundary, never surfaced.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PrefsError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// File-backed store for [`BedTrackingPreferences`].
#[derive(Clone, Debug)]
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Store at the default XDG data location.
    pub fn open_default() -> Self {
        Self::at(paths::data_dir().join(PREFS_FILE_NAME))
    }

    /// Store at an explicit path (tests, embedded hosts).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load preferences, falling back to defaults on any failure.
    ///
    /// A missing file is first use, not an error. Unreadable or malformed
    /// content logs a warning and yields defaults; structurally valid JSON
    /// is repaired field by field.
    pub fn load(&self) -> BedTrackingPreferences {
        match self.read_raw() {
            Ok(Some(value)) => BedTrackingPreferences::sanitize(&value),
            Ok(None) => BedTrackingPreferences::default(),
            Err(e) => {
                tracing::warn!("failed to load bed tracking preferences, using defaults: {e}");
                BedTrackingPreferences::default()
            }
        }
    }

    /// Persist preferences. Best-effort: failures are logged, not raised.
    pub fn save(&self, prefs: &BedTrackingPreferences) {
        if let Err(e) = self.write_atomic(prefs) {
            tracing::warn!("failed to save bed tracking preferences: {e}");
        }
    }

    /// Remove the stored record (explicit reset). Best-effort.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("failed to clear bed tracking preferences: {e}");
            }
        }
    }

    /// Fresh copy of the default record.
    pub fn defaults(&self) -> BedTrackingPreferences {
        BedTrackingPreferences::default()
    }

    fn read_raw(&self) -> Result<Option<serde_json::Value>, PrefsError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PrefsError::Read {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|e| PrefsError::Parse {
                path: self.path.clone(),
                source: e,
            })
    }

    fn write_atomic(&self, prefs: &BedTrackingPreferences) -> Result<(), PrefsError> {
        let write_err = |reason: String| PrefsError::Write {
            path: self.path.clone(),
            reason,
        };

        let dir = self
            .path
            .parent()
            .ok_or_else(|| write_err("path has no parent directory".to_string()))?;
        fs::create_dir_all(dir).map_err(|e| write_err(format!("create dir: {e}")))?;

        let contents = serde_json::to_vec_pretty(prefs)
            .map_err(|e| write_err(format!("serialize: {e}")))?;

        let mut temp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| write_err(format!("create temp file: {e}")))?;
        temp.write_all(&contents)
            .map_err(|e| write_err(format!("write temp: {e}")))?;
        temp.persist(&self.path)
            .map_err(|e| write_err(format!("persist: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> PreferencesStore {
        PreferencesStore::at(dir.path().join(PREFS_FILE_NAME))
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        assert_eq!(store.load(), BedTrackingPreferences::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let prefs = BedTrackingPreferences {
            program_filter: "workforceHousing".into(),
            status_filter: "all".into(),
            show_archived: true,
        };
        store.save(&prefs);
        assert_eq!(store.load(), prefs);
    }

    #[test]
    fn corrupted_json_loads_exact_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(store.path(), b"{not json!").expect("write corruption");
        assert_eq!(store.load(), BedTrackingPreferences::default());
    }

    #[test]
    fn wrong_field_types_repair_per_field() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        fs::write(
            store.path(),
            br#"{"programFilter":"medicalStepDown","statusFilter":7,"showArchived":"no"}"#,
        )
        .expect("write record");
        let prefs = store.load();
        assert_eq!(prefs.program_filter, "medicalStepDown");
        assert_eq!(prefs.status_filter, "available");
        assert!(!prefs.show_archived);
    }

    #[test]
    fn clear_removes_the_record_and_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        store.save(&BedTrackingPreferences {
            program_filter: "all".into(),
            status_filter: "occupied".into(),
            show_archived: false,
        });
        store.clear();
        assert_eq!(store.load(), BedTrackingPreferences::default());
        // Clearing again must not warn-or-fail its way into a panic.
        store.clear();
    }

    #[test]
    fn defaults_returns_a_fresh_copy() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(&dir);
        let mut d = store.defaults();
        d.show_archived = true;
        assert!(!store.defaults().show_archived);
    }
}
