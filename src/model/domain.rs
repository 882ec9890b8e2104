//! Domain enums.
//!
//! ReferralStatus: submitted, needsInfo, approved, declined, waitlisted
//! BedStatus: available, occupied, maintenance
//! Program: medicalStepDown, workforceHousing

use serde::{Deserialize, Serialize};

use super::error::{InvalidValue, ModelError};

/// Referral workflow status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReferralStatus {
    Submitted,
    NeedsInfo,
    Approved,
    Declined,
    Waitlisted,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::NeedsInfo => "needsInfo",
            Self::Approved => "approved",
            Self::Declined => "declined",
            Self::Waitlisted => "waitlisted",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "submitted" => Ok(Self::Submitted),
            "needsInfo" => Ok(Self::NeedsInfo),
            "approved" => Ok(Self::Approved),
            "declined" => Ok(Self::Declined),
            "waitlisted" => Ok(Self::Waitlisted),
            _ => Err(InvalidValue {
                field: "status",
                raw: s.to_string(),
                expected: "submitted, needsInfo, approved, declined, waitlisted",
            }
            .into()),
        }
    }

    /// Fixed display rank for status-mode sorting (lower sorts first).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Submitted => 1,
            Self::NeedsInfo => 2,
            Self::Waitlisted => 3,
            Self::Approved => 4,
            Self::Declined => 5,
        }
    }
}

/// Bed occupancy status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BedStatus {
    Available,
    Occupied,
    Maintenance,
}

impl BedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Occupied => "occupied",
            Self::Maintenance => "maintenance",
        }
    }
}

/// Housing program a bed belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Program {
    MedicalStepDown,
    WorkforceHousing,
}

impl Program {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MedicalStepDown => "medicalStepDown",
            Self::WorkforceHousing => "workforceHousing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MedicalStepDown => "Medical Step-Down",
            Self::WorkforceHousing => "Workforce Housing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_rank_order() {
        let ranked = [
            ReferralStatus::Submitted,
            ReferralStatus::NeedsInfo,
            ReferralStatus::Waitlisted,
            ReferralStatus::Approved,
            ReferralStatus::Declined,
        ];
        for pair in ranked.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn status_parse_roundtrip() {
        for s in ["submitted", "needsInfo", "approved", "declined", "waitlisted"] {
            assert_eq!(ReferralStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(ReferralStatus::parse("pending").is_err());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_string(&ReferralStatus::NeedsInfo).unwrap();
        assert_eq!(json, "\"needsInfo\"");
        let json = serde_json::to_string(&Program::MedicalStepDown).unwrap();
        assert_eq!(json, "\"medicalStepDown\"");
    }
}
