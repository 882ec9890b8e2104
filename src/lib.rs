#![forbid(unsafe_code)]

pub mod api;
pub mod backend;
pub mod error;
pub mod model;
mod paths;
pub mod prefs;
pub mod telemetry;
pub mod view;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

// Re-export core types at crate root for convenience
pub use crate::backend::{BackendActor, BackendError};
pub use crate::model::{
    ActorId, Bed, BedId, BedStatus, FacilityId, Intake, IntakeId, Program, Referral, ReferralId,
    ReferralStatus, Timestamp, UserProfile, WallClock,
};
pub use crate::prefs::{BedTrackingPreferences, PreferencesStore};
pub use crate::view::SortMode;
