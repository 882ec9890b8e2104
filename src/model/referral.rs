//! The Referral - a partner agency's request to place a client.
//!
//! Read-only copy of the backend record, trimmed to the fields this layer
//! reads. The backend owns the workflow; nothing here mutates it.

use serde::{Deserialize, Serialize};

use super::domain::ReferralStatus;
use super::identity::{ActorId, IntakeId, ReferralId};
use super::time::Timestamp;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    pub id: ReferralId,
    pub status: ReferralStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub client_name: String,
    pub partner_agency_name: String,
    pub referrer_name: String,
    /// Free-form program name as entered on the referral form.
    pub program_requested: String,
    pub reason: String,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<ActorId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_staff: Option<ActorId>,
    /// Set once staff approve the referral and convert it to an intake.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_intake_id: Option<IntakeId>,
}

impl Referral {
    /// Approved but not yet converted to an intake - a follow-up gap the
    /// dashboard surfaces.
    pub fn is_approved_unconverted(&self) -> bool {
        self.status == ReferralStatus::Approved && self.converted_intake_id.is_none()
    }
}
