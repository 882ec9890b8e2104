//! UI-facing assembly of derived state.

mod board;

pub use board::{
    Dashboard, ReferralQuery, ReferralRow, dashboard, program_options, referral_board,
};
