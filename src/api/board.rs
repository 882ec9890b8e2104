//! View-model assembly - the filter -> sort -> risk -> display pipeline.
//!
//! Fetches snapshots through the backend seam and derives everything the
//! UI renders. Pure given the snapshots and the supplied clock; no step
//! mutates backend state or another step's output.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::Result;
use crate::backend::BackendActor;
use crate::model::{ActorId, Referral, ReferralStatus, UserProfile, WallClock};
use crate::view::{
    BedUtilization, ReferralCounts, RiskOverview, SortMode, apply_all_filters,
    format_waiting_time, is_referral_at_risk, sort_referrals, unique_program_options,
    user_display_name,
};

/// Filter and sort selection for the referrals board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralQuery {
    /// `None` is the "all" sentinel.
    pub status: Option<ReferralStatus>,
    pub program: Option<String>,
    pub start: Option<Date>,
    pub end: Option<Date>,
    pub sort: SortMode,
}

impl Default for ReferralQuery {
    fn default() -> Self {
        Self {
            status: None,
            program: None,
            start: None,
            end: None,
            sort: SortMode::SubmissionDate,
        }
    }
}

/// One rendered row of the referrals board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralRow {
    pub referral: Referral,
    pub at_risk: bool,
    /// "Waiting N hours/days" label.
    pub waiting: String,
    pub assigned_staff_name: String,
}

/// Referrals board: filtered, sorted, risk-flagged, names resolved.
pub fn referral_board(
    backend: &dyn BackendActor,
    query: &ReferralQuery,
    now: WallClock,
) -> Result<Vec<ReferralRow>> {
    let referrals = backend.all_referrals()?;
    let directory = backend.all_users()?;

    let filtered = apply_all_filters(
        &referrals,
        query.status,
        query.program.as_deref(),
        query.start,
        query.end,
    );
    let sorted = sort_referrals(&filtered, query.sort);

    Ok(sorted
        .into_iter()
        .map(|referral| build_row(referral, &directory, now))
        .collect())
}

fn build_row(
    referral: Referral,
    directory: &[(ActorId, UserProfile)],
    now: WallClock,
) -> ReferralRow {
    ReferralRow {
        at_risk: is_referral_at_risk(referral.created_at, now),
        waiting: format_waiting_time(referral.created_at, now),
        assigned_staff_name: user_display_name(referral.assigned_staff.as_ref(), directory),
        referral,
    }
}

/// Program dropdown options for the current referral snapshot.
pub fn program_options(backend: &dyn BackendActor) -> Result<Vec<String>> {
    let referrals = backend.all_referrals()?;
    Ok(unique_program_options(&referrals))
}

/// Admin dashboard snapshot: counts, utilization, and risk signals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub referrals: ReferralCounts,
    pub beds: BedUtilization,
    pub risk: RiskOverview,
}

/// Assemble the dashboard from one consistent set of snapshots.
///
/// Both bed utilization and the risk overview cover active (non-archived)
/// beds only, matching the admin summary views.
pub fn dashboard(backend: &dyn BackendActor, now: WallClock) -> Result<Dashboard> {
    let referrals = backend.all_referrals()?;
    let intakes = backend.all_intakes()?;
    let beds = backend.all_beds()?;

    let active_beds: Vec<_> = beds.iter().filter(|b| !b.is_archived).cloned().collect();

    Ok(Dashboard {
        referrals: ReferralCounts::tally(&referrals),
        beds: BedUtilization::tally(&active_beds),
        risk: RiskOverview::compute(&referrals, &intakes, &active_beds, now),
    })
}
