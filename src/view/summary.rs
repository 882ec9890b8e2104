//! Dashboard summaries - counts derived from entity lists.
//!
//! Everything here is a pure fold over the caller's snapshot; the backend
//! is never consulted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::filters::FILTER_ALL;
use super::risk::{is_bed_at_risk, is_intake_at_risk, is_referral_at_risk};
use crate::model::{Bed, BedStatus, Intake, Program, Referral, ReferralStatus, WallClock};
use crate::prefs::BedTrackingPreferences;

/// Referral counts by status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralCounts {
    pub total: usize,
    pub submitted: usize,
    pub needs_info: usize,
    pub approved: usize,
    pub waitlisted: usize,
    pub declined: usize,
}

impl ReferralCounts {
    pub fn tally(referrals: &[Referral]) -> Self {
        let mut counts = Self {
            total: referrals.len(),
            ..Self::default()
        };
        for r in referrals {
            match r.status {
                ReferralStatus::Submitted => counts.submitted += 1,
                ReferralStatus::NeedsInfo => counts.needs_info += 1,
                ReferralStatus::Approved => counts.approved += 1,
                ReferralStatus::Waitlisted => counts.waitlisted += 1,
                ReferralStatus::Declined => counts.declined += 1,
            }
        }
        counts
    }
}

/// Per-program slice of the bed utilization summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramUtilization {
    pub program: Program,
    pub label: String,
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
}

/// Bed utilization totals with a per-program breakdown.
///
/// Callers pass the bed set they mean to summarize (the admin view passes
/// active beds only).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedUtilization {
    pub total: usize,
    pub available: usize,
    pub occupied: usize,
    pub programs: Vec<ProgramUtilization>,
}

impl BedUtilization {
    pub fn tally(beds: &[Bed]) -> Self {
        let mut by_program: BTreeMap<Program, Vec<&Bed>> = BTreeMap::new();
        for bed in beds {
            by_program.entry(bed.program).or_default().push(bed);
        }

        let count = |beds: &[&Bed], status: BedStatus| {
            beds.iter().filter(|b| b.status == status).count()
        };

        let programs = by_program
            .into_iter()
            .map(|(program, beds)| ProgramUtilization {
                program,
                label: program.label().to_owned(),
                total: beds.len(),
                available: count(&beds, BedStatus::Available),
                occupied: count(&beds, BedStatus::Occupied),
            })
            .collect();

        Self {
            total: beds.len(),
            available: beds.iter().filter(|b| b.status == BedStatus::Available).count(),
            occupied: beds.iter().filter(|b| b.status == BedStatus::Occupied).count(),
            programs,
        }
    }
}

/// Items needing immediate attention, across all three entity kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskOverview {
    /// Submitted referrals awaiting staff review.
    pub referrals_waiting_review: usize,
    /// Submitted referrals waiting past the 72-hour threshold.
    pub at_risk_referrals: usize,
    pub active_intakes_without_bed: usize,
    pub active_intakes_without_case_manager: usize,
    pub beds_missing_exit_date: usize,
    /// Approved referrals never converted to an intake.
    pub approved_not_converted: usize,
}

impl RiskOverview {
    pub fn compute(
        referrals: &[Referral],
        intakes: &[Intake],
        beds: &[Bed],
        now: WallClock,
    ) -> Self {
        let waiting: Vec<&Referral> = referrals
            .iter()
            .filter(|r| r.status == ReferralStatus::Submitted)
            .collect();

        Self {
            referrals_waiting_review: waiting.len(),
            at_risk_referrals: waiting
                .iter()
                .filter(|r| is_referral_at_risk(r.created_at, now))
                .count(),
            active_intakes_without_bed: intakes.iter().filter(|i| is_intake_at_risk(i)).count(),
            active_intakes_without_case_manager: intakes
                .iter()
                .filter(|i| i.is_active() && i.case_manager.is_none())
                .count(),
            beds_missing_exit_date: beds.iter().filter(|b| is_bed_at_risk(b, intakes)).count(),
            approved_not_converted: referrals
                .iter()
                .filter(|r| r.is_approved_unconverted())
                .count(),
        }
    }
}

/// Bed list filtered by the saved tracking preferences.
///
/// `show_archived` is a toggle between the archived and active views, not
/// an include flag; program and status match exactly unless set to the
/// "all" sentinel.
pub fn filter_beds(beds: &[Bed], prefs: &BedTrackingPreferences) -> Vec<Bed> {
    beds.iter()
        .filter(|bed| {
            let archive_ok = if prefs.show_archived {
                bed.is_archived
            } else {
                !bed.is_archived
            };
            let program_ok =
                prefs.program_filter == FILTER_ALL || bed.program.as_str() == prefs.program_filter;
            let status_ok =
                prefs.status_filter == FILTER_ALL || bed.status.as_str() == prefs.status_filter;
            archive_ok && program_ok && status_ok
        })
        .cloned()
        .collect()
}

/// Display order for the beds tab: available beds first, then id ascending.
pub fn sort_beds_for_display(beds: &[Bed]) -> Vec<Bed> {
    let mut sorted = beds.to_vec();
    sorted.sort_by(|a, b| {
        let a_avail = a.status != BedStatus::Available;
        let b_avail = b.status != BedStatus::Available;
        a_avail.cmp(&b_avail).then_with(|| a.id.cmp(&b.id))
    });
    sorted
}
