//! The Bed - a physical placement slot in a facility.

use serde::{Deserialize, Serialize};

use super::domain::{BedStatus, Program};
use super::identity::{BedId, FacilityId};

/// Read-only copy of the backend bed record.
///
/// Carries no reference to the occupying intake; occupancy is correlated
/// through `Intake::assigned_bed_id`, which takes a scan of the intake
/// list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bed {
    pub id: BedId,
    pub status: BedStatus,
    pub program: Program,
    pub bed_number: String,
    pub is_archived: bool,
    pub facility_id: FacilityId,
}
