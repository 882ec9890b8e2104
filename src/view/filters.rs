//! Referral list filters.
//!
//! Pure, composable, AND-combined. Every function returns a fresh Vec and
//! preserves the input's relative order.

use std::collections::BTreeSet;

use time::Date;

use crate::model::{Referral, ReferralStatus};

/// Sentinel filter value meaning "no restriction".
pub const FILTER_ALL: &str = "all";

/// Distinct non-empty `program_requested` values, sorted ascending.
pub fn unique_program_options(referrals: &[Referral]) -> Vec<String> {
    let programs: BTreeSet<&str> = referrals
        .iter()
        .map(|r| r.program_requested.as_str())
        .filter(|p| !p.is_empty())
        .collect();
    programs.into_iter().map(String::from).collect()
}

/// Exact program match; `None` or the `"all"` sentinel passes everything.
pub fn filter_by_program(referrals: &[Referral], program: Option<&str>) -> Vec<Referral> {
    match program {
        None => referrals.to_vec(),
        Some(p) if p == FILTER_ALL => referrals.to_vec(),
        Some(p) => referrals
            .iter()
            .filter(|r| r.program_requested == p)
            .cloned()
            .collect(),
    }
}

/// Submission-date range filter, inclusive on both ends.
///
/// Comparison is at UTC day boundaries - time-of-day is discarded on both
/// the referral timestamp and the bounds. Either bound may be omitted.
pub fn filter_by_date_range(
    referrals: &[Referral],
    start: Option<Date>,
    end: Option<Date>,
) -> Vec<Referral> {
    if start.is_none() && end.is_none() {
        return referrals.to_vec();
    }

    referrals
        .iter()
        .filter(|r| {
            let day = r.created_at.utc_date();
            start.is_none_or(|s| day >= s) && end.is_none_or(|e| day <= e)
        })
        .cloned()
        .collect()
}

/// All filters ANDed: status, then program, then date range.
///
/// The order only matters for how much work later stages see; the
/// predicates are independent. `None` status is the "all" sentinel.
pub fn apply_all_filters(
    referrals: &[Referral],
    status: Option<ReferralStatus>,
    program: Option<&str>,
    start: Option<Date>,
    end: Option<Date>,
) -> Vec<Referral> {
    let filtered: Vec<Referral> = match status {
        None => referrals.to_vec(),
        Some(s) => referrals.iter().filter(|r| r.status == s).cloned().collect(),
    };
    let filtered = filter_by_program(&filtered, program);
    filter_by_date_range(&filtered, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ReferralId, Timestamp};
    use time::macros::date;

    fn referral(id: u64, status: ReferralStatus, program: &str, created_ns: u64) -> Referral {
        Referral {
            id: ReferralId(id),
            status,
            created_at: Timestamp(created_ns),
            updated_at: Timestamp(created_ns),
            client_name: "Client".into(),
            partner_agency_name: "Agency".into(),
            referrer_name: "Referrer".into(),
            program_requested: program.into(),
            reason: "Housing".into(),
            source: "phone".into(),
            submitted_by: None,
            assigned_staff: None,
            converted_intake_id: None,
        }
    }

    const NS_PER_SEC: u64 = 1_000_000_000;

    #[test]
    fn program_options_are_unique_sorted_non_empty() {
        let refs = vec![
            referral(1, ReferralStatus::Submitted, "workforceHousing", 0),
            referral(2, ReferralStatus::Submitted, "", 0),
            referral(3, ReferralStatus::Submitted, "medicalStepDown", 0),
            referral(4, ReferralStatus::Submitted, "workforceHousing", 0),
        ];
        assert_eq!(
            unique_program_options(&refs),
            vec!["medicalStepDown".to_string(), "workforceHousing".to_string()]
        );
        // Stable for repeated calls.
        assert_eq!(unique_program_options(&refs), unique_program_options(&refs));
    }

    #[test]
    fn program_filter_sentinel_passes_through() {
        let refs = vec![
            referral(1, ReferralStatus::Submitted, "medicalStepDown", 0),
            referral(2, ReferralStatus::Submitted, "workforceHousing", 0),
        ];
        assert_eq!(filter_by_program(&refs, None).len(), 2);
        assert_eq!(filter_by_program(&refs, Some("all")).len(), 2);
        let only = filter_by_program(&refs, Some("medicalStepDown"));
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].id, ReferralId(1));
    }

    #[test]
    fn date_range_is_inclusive_at_day_boundaries() {
        // 2024-01-31T23:59:00Z and 2024-02-01T00:00:00Z
        let in_range = referral(1, ReferralStatus::Submitted, "p", 1_706_745_540 * NS_PER_SEC);
        let past_end = referral(2, ReferralStatus::Submitted, "p", 1_706_745_600 * NS_PER_SEC);
        let refs = vec![in_range, past_end];

        let out = filter_by_date_range(&refs, Some(date!(2024 - 01 - 01)), Some(date!(2024 - 01 - 31)));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, ReferralId(1));
    }

    #[test]
    fn single_bound_works_independently() {
        let jan = referral(1, ReferralStatus::Submitted, "p", 1_704_067_200 * NS_PER_SEC); // 2024-01-01
        let feb = referral(2, ReferralStatus::Submitted, "p", 1_706_745_600 * NS_PER_SEC); // 2024-02-01
        let refs = vec![jan, feb];

        let from_feb = filter_by_date_range(&refs, Some(date!(2024 - 02 - 01)), None);
        assert_eq!(from_feb.len(), 1);
        assert_eq!(from_feb[0].id, ReferralId(2));

        let until_jan = filter_by_date_range(&refs, None, Some(date!(2024 - 01 - 31)));
        assert_eq!(until_jan.len(), 1);
        assert_eq!(until_jan[0].id, ReferralId(1));

        assert_eq!(filter_by_date_range(&refs, None, None).len(), 2);
    }

    #[test]
    fn status_only_filter_preserves_relative_order() {
        let refs = vec![
            referral(1, ReferralStatus::Approved, "p", 30),
            referral(2, ReferralStatus::Submitted, "p", 20),
            referral(3, ReferralStatus::Approved, "p", 10),
        ];
        let out = apply_all_filters(&refs, Some(ReferralStatus::Approved), Some("all"), None, None);
        let ids: Vec<u64> = out.iter().map(|r| r.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
