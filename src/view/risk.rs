//! At-risk indicators.
//!
//! Three independent predicates derived purely from entity fields and
//! timestamps; no side effects, no backend calls.

use crate::model::{Bed, Intake, Timestamp, WallClock};

/// Referrals waiting longer than this are flagged (72 hours).
pub const REFERRAL_WAIT_THRESHOLD_MS: i64 = 72 * 60 * 60 * 1000;

pub const REFERRAL_AT_RISK_LABEL: &str = "Over 72 hours";
pub const INTAKE_AT_RISK_LABEL: &str = "No bed assigned";
pub const BED_AT_RISK_LABEL: &str = "Missing exit date";

/// Referral waiting more than 72 hours since submission.
///
/// Strictly greater-than: exactly 72h elapsed is not yet at risk.
pub fn is_referral_at_risk(created_at: Timestamp, now: WallClock) -> bool {
    created_at.elapsed_ms(now) > REFERRAL_WAIT_THRESHOLD_MS
}

/// Active intake with no bed assigned.
///
/// Presence check on the id, not its value - `Some(BedId(0))` is a bed.
pub fn is_intake_at_risk(intake: &Intake) -> bool {
    intake.is_active() && intake.assigned_bed_id.is_none()
}

/// Bed occupied through an active intake that is missing an exit date.
///
/// Full scan of the intake list per bed. The dataset is tens of rows, so
/// no index is maintained client-side; callers batching over many beds
/// accept the quadratic walk.
pub fn is_bed_at_risk(bed: &Bed, intakes: &[Intake]) -> bool {
    let assigned = intakes
        .iter()
        .find(|intake| intake.assigned_bed_id == Some(bed.id) && intake.is_active());

    match assigned {
        // Vacant or correctly tracked.
        None => false,
        Some(intake) => intake.exit_date.is_none(),
    }
}
