//! Client-local persisted preferences.
//!
//! The only durable state this layer owns; everything else is a read-only
//! copy of backend data.

mod schema;
mod store;

pub use schema::{BedTrackingPreferences, PROGRAM_FILTERS, STATUS_FILTERS};
pub use store::{PREFS_FILE_NAME, PreferencesStore, PrefsError};
