//! Preferences store integration tests: durability layout and the
//! never-throw boundary, against a real temp directory.

use std::fs;

use neighbors_light::BedTrackingPreferences;
use neighbors_light::prefs::{PREFS_FILE_NAME, PreferencesStore};

#[test]
fn round_trip_preserves_every_valid_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PreferencesStore::at(dir.path().join(PREFS_FILE_NAME));

    for program in ["all", "medicalStepDown", "workforceHousing"] {
        for status in ["all", "available", "occupied"] {
            for archived in [false, true] {
                let prefs = BedTrackingPreferences {
                    program_filter: program.to_string(),
                    status_filter: status.to_string(),
                    show_archived: archived,
                };
                store.save(&prefs);
                assert_eq!(store.load(), prefs);
            }
        }
    }
}

#[test]
fn stored_record_is_plain_camel_case_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PreferencesStore::at(dir.path().join(PREFS_FILE_NAME));
    store.save(&BedTrackingPreferences::default());

    let raw = fs::read_to_string(store.path()).expect("read record");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("parse record");
    assert_eq!(value["programFilter"], "all");
    assert_eq!(value["statusFilter"], "available");
    assert_eq!(value["showArchived"], false);
}

#[test]
fn corruption_falls_back_to_exact_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PreferencesStore::at(dir.path().join(PREFS_FILE_NAME));

    for garbage in [
        &b"not json at all"[..],
        b"[1,2,3]",
        b"\"just a string\"",
        b"{\"programFilter\":42}",
        b"",
    ] {
        fs::write(store.path(), garbage).expect("write garbage");
        assert_eq!(store.load(), BedTrackingPreferences::default());
    }
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deep").join("nested").join(PREFS_FILE_NAME);
    let store = PreferencesStore::at(nested);

    let prefs = BedTrackingPreferences {
        program_filter: "medicalStepDown".to_string(),
        status_filter: "occupied".to_string(),
        show_archived: true,
    };
    store.save(&prefs);
    assert_eq!(store.load(), prefs);
}

#[test]
fn clear_then_load_returns_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = PreferencesStore::at(dir.path().join(PREFS_FILE_NAME));

    store.save(&BedTrackingPreferences {
        program_filter: "workforceHousing".to_string(),
        status_filter: "all".to_string(),
        show_archived: true,
    });
    store.clear();
    assert!(!store.path().exists());
    assert_eq!(store.load(), BedTrackingPreferences::default());
}
