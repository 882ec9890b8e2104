//! Bed tracking preferences record and its field-level validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Accepted `program_filter` values.
pub const PROGRAM_FILTERS: [&str; 3] = ["all", "medicalStepDown", "workforceHousing"];

/// Accepted `status_filter` values.
pub const STATUS_FILTERS: [&str; 3] = ["all", "available", "occupied"];

/// UI filter preferences for the beds tab.
///
/// Persisted as a JSON object with exactly these three camelCase fields;
/// there is no version field, so any shape mismatch is treated as
/// corruption and repaired field by field rather than migrated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedTrackingPreferences {
    pub program_filter: String,
    pub status_filter: String,
    pub show_archived: bool,
}

impl Default for BedTrackingPreferences {
    fn default() -> Self {
        Self {
            program_filter: "all".to_string(),
            status_filter: "available".to_string(),
            show_archived: false,
        }
    }
}

impl BedTrackingPreferences {
    /// Rebuild a record from untrusted JSON, field by field.
    ///
    /// Each invalid or missing field falls back to its default without
    /// invalidating the rest of the record.
    pub fn sanitize(raw: &Value) -> Self {
        let defaults = Self::default();

        let string_field = |key: &str, allowed: &[&str], fallback: String| {
            match raw.get(key).and_then(Value::as_str) {
                Some(s) if allowed.contains(&s) => s.to_string(),
                _ => fallback,
            }
        };

        Self {
            program_filter: string_field("programFilter", &PROGRAM_FILTERS, defaults.program_filter),
            status_filter: string_field("statusFilter", &STATUS_FILTERS, defaults.status_filter),
            show_archived: raw
                .get("showArchived")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.show_archived),
        }
    }
}
