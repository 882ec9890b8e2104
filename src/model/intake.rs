//! The Intake - an admitted client case.

use serde::{Deserialize, Serialize};

use super::identity::{ActorId, BedId, IntakeId};
use super::time::Timestamp;

/// Intake status value that marks a departed client.
pub const INTAKE_STATUS_EXITED: &str = "exited";

/// Read-only copy of the backend intake record.
///
/// Status is a free-form string on the wire (notably `pending`, `approved`,
/// `rejected`, `exited`); unknown values must survive, so it stays a String
/// with helpers for the values this layer branches on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub id: IntakeId,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub submitted_by: ActorId,
    /// Present only once the client has departed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_date: Option<Timestamp>,
    /// Bed occupancy back-reference; `Some(BedId(0))` is a real bed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_bed_id: Option<BedId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_manager: Option<ActorId>,
}

impl Intake {
    pub fn is_exited(&self) -> bool {
        self.status == INTAKE_STATUS_EXITED
    }

    /// Active = still in care (any status other than exited).
    pub fn is_active(&self) -> bool {
        !self.is_exited()
    }
}
