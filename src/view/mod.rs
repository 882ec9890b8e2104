//! Derived-state components: pure transforms from entity lists to
//! UI-ready facts. Nothing in this module performs I/O.

pub mod display;
pub mod filters;
pub mod risk;
pub mod sort;
pub mod summary;
pub mod validation;
pub mod waiting;

pub use display::{SYSTEM_ACTOR_LABEL, user_display_name};
pub use filters::{
    FILTER_ALL, apply_all_filters, filter_by_date_range, filter_by_program, unique_program_options,
};
pub use risk::{
    BED_AT_RISK_LABEL, INTAKE_AT_RISK_LABEL, REFERRAL_AT_RISK_LABEL, REFERRAL_WAIT_THRESHOLD_MS,
    is_bed_at_risk, is_intake_at_risk, is_referral_at_risk,
};
pub use sort::{Activity, SortMode, sort_by_activity, sort_referrals};
pub use summary::{
    BedUtilization, ProgramUtilization, ReferralCounts, RiskOverview, filter_beds,
    sort_beds_for_display,
};
pub use validation::{FieldError, ReferralForm, friendly_submit_error, validate_referral_form};
pub use waiting::format_waiting_time;
