//! Referral ordering.
//!
//! Every comparator ends in an id tie-break, so the order is total and
//! reproducible across renders and pagination.

use serde::{Deserialize, Serialize};

use crate::model::{Intake, IntakeId, Referral, ReferralId, Timestamp};

/// Referral list sort mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortMode {
    SubmissionDate,
    Status,
}

/// Sort referrals without mutating the input.
///
/// `SubmissionDate`: created_at descending (newest first), id descending.
/// `Status`: status rank ascending, then created_at descending, then id
/// descending.
pub fn sort_referrals(referrals: &[Referral], mode: SortMode) -> Vec<Referral> {
    let mut sorted = referrals.to_vec();
    match mode {
        SortMode::SubmissionDate => {
            sorted.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            });
        }
        SortMode::Status => {
            sorted.sort_by(|a, b| {
                a.status
                    .rank()
                    .cmp(&b.status.rank())
                    .then_with(|| b.created_at.cmp(&a.created_at))
                    .then_with(|| b.id.cmp(&a.id))
            });
        }
    }
    sorted
}

/// Anything orderable by recent activity.
///
/// The id feeds the deterministic tie-break, nothing more.
pub trait Activity {
    fn updated_at(&self) -> Timestamp;
    fn activity_id(&self) -> u64;
}

impl Activity for Referral {
    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn activity_id(&self) -> u64 {
        let ReferralId(id) = self.id;
        id
    }
}

impl Activity for Intake {
    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn activity_id(&self) -> u64 {
        let IntakeId(id) = self.id;
        id
    }
}

/// Sort by updated_at descending (most recent first), id descending.
pub fn sort_by_activity<T: Activity + Clone>(items: &[T]) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        b.updated_at()
            .cmp(&a.updated_at())
            .then_with(|| b.activity_id().cmp(&a.activity_id()))
    });
    sorted
}
