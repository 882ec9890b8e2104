//! Entity layer: read-only copies of backend records plus the atoms they
//! are built from.
//!
//! Layering (leaves first): error, identity, time, domain, entities.

mod bed;
mod domain;
pub mod error;
mod identity;
mod intake;
mod referral;
mod time;
mod user;

pub use bed::Bed;
pub use domain::{BedStatus, Program, ReferralStatus};
pub use error::ModelError;
pub use identity::{ActorId, BedId, FacilityId, IntakeId, ReferralId};
pub use intake::{INTAKE_STATUS_EXITED, Intake};
pub use referral::Referral;
pub use time::{Timestamp, WallClock};
pub use user::UserProfile;
