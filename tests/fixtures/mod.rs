//! Shared entity builders for integration tests.

#![allow(dead_code)]

use neighbors_light::{
    ActorId, Bed, BedId, BedStatus, FacilityId, Intake, IntakeId, Program, Referral, ReferralId,
    ReferralStatus, Timestamp, UserProfile,
};

pub const NS_PER_HOUR: u64 = 60 * 60 * 1_000_000_000;

pub fn referral(id: u64, status: ReferralStatus, created_ns: u64) -> Referral {
    Referral {
        id: ReferralId(id),
        status,
        created_at: Timestamp(created_ns),
        updated_at: Timestamp(created_ns),
        client_name: format!("Client {id}"),
        partner_agency_name: "Harbor Outreach".into(),
        referrer_name: "Sam Okafor".into(),
        program_requested: "workforceHousing".into(),
        reason: "Needs housing".into(),
        source: "phone".into(),
        submitted_by: None,
        assigned_staff: None,
        converted_intake_id: None,
    }
}

pub fn intake(id: u64, status: &str, bed: Option<u64>) -> Intake {
    Intake {
        id: IntakeId(id),
        status: status.to_string(),
        created_at: Timestamp(0),
        updated_at: Timestamp(0),
        submitted_by: actor("staff-principal-1"),
        exit_date: None,
        assigned_bed_id: bed.map(BedId),
        case_manager: None,
    }
}

pub fn bed(id: u64, status: BedStatus, program: Program) -> Bed {
    Bed {
        id: BedId(id),
        status,
        program,
        bed_number: format!("B-{id}"),
        is_archived: false,
        facility_id: FacilityId(1),
    }
}

pub fn actor(id: &str) -> ActorId {
    ActorId::new(id).expect("actor id")
}

pub fn named_user(id: &str, name: &str) -> (ActorId, UserProfile) {
    (
        actor(id),
        UserProfile {
            name: name.to_string(),
            role: Some("staff".to_string()),
            email: None,
            phone: None,
        },
    )
}
