//! Referral form validation.
//!
//! Client-side required-field checks mirroring what the backend enforces,
//! so users get field-level feedback before a round trip.

use serde::{Deserialize, Serialize};

/// Referral form input, pre-submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralForm {
    pub partner_agency_name: String,
    pub referrer_name: String,
    pub client_name: String,
    pub reason: String,
    pub program_requested: String,
    pub contact_info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub source: String,
}

/// One failed field with its user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Required-field checks; whitespace-only counts as empty.
///
/// Returns one entry per failed field, in form order. Empty = valid.
pub fn validate_referral_form(form: &ReferralForm) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let mut require = |value: &str, field: &'static str, message: &'static str| {
        if value.trim().is_empty() {
            errors.push(FieldError { field, message });
        }
    };

    require(
        &form.partner_agency_name,
        "partnerAgencyName",
        "Partner agency name is required",
    );
    require(&form.referrer_name, "referrerName", "Referrer name is required");
    require(&form.client_name, "clientName", "Client name is required");
    require(&form.reason, "reason", "Reason for referral is required");
    require(
        &form.program_requested,
        "programRequested",
        "Program requested is required",
    );
    require(&form.contact_info, "contactInfo", "Contact info is required");
    require(&form.source, "source", "Referral source is required");

    errors
}

/// Map a raw backend error message to something worth showing a user.
pub fn friendly_submit_error(message: &str) -> String {
    let lower = message.to_lowercase();
    if lower.contains("invalid input") || lower.contains("missing required") {
        return "Please fill in all required fields correctly".to_string();
    }
    if lower.contains("partner agency profile not found") {
        return "Please complete your Partner Agency profile first".to_string();
    }
    message.to_string()
}
