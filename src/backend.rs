//! The backend actor seam.
//!
//! The backend owns all entities and business logic; this layer only reads.
//! The trait exposes exactly the list operations the derived-state layer
//! consumes, so integration code plugs in an RPC client and tests plug in
//! a fake - nothing here ever reaches a live service on its own.

use thiserror::Error;

use crate::model::{ActorId, Bed, Intake, Referral, UserProfile};

/// A backend call failed. Implementation-defined message; callers treat
/// every failure the same way (surface and refetch later).
#[derive(Debug, Error, Clone)]
#[error("backend call `{method}` failed: {message}")]
pub struct BackendError {
    pub method: &'static str,
    pub message: String,
}

impl BackendError {
    pub fn new(method: &'static str, message: impl Into<String>) -> Self {
        Self {
            method,
            message: message.into(),
        }
    }
}

/// Read operations this layer consumes from the backend actor.
///
/// Each call is an independent request/response snapshot; no streaming or
/// subscription model. Mutations stay out of this layer entirely.
pub trait BackendActor {
    fn all_referrals(&self) -> Result<Vec<Referral>, BackendError>;
    fn all_intakes(&self) -> Result<Vec<Intake>, BackendError>;
    fn all_beds(&self) -> Result<Vec<Bed>, BackendError>;
    /// The user directory, keyed by actor id.
    fn all_users(&self) -> Result<Vec<(ActorId, UserProfile)>, BackendError>;
}

/// In-memory backend for tests and demos.
#[derive(Clone, Debug, Default)]
pub struct InMemoryBackend {
    pub referrals: Vec<Referral>,
    pub intakes: Vec<Intake>,
    pub beds: Vec<Bed>,
    pub users: Vec<(ActorId, UserProfile)>,
}

impl BackendActor for InMemoryBackend {
    fn all_referrals(&self) -> Result<Vec<Referral>, BackendError> {
        Ok(self.referrals.clone())
    }

    fn all_intakes(&self) -> Result<Vec<Intake>, BackendError> {
        Ok(self.intakes.clone())
    }

    fn all_beds(&self) -> Result<Vec<Bed>, BackendError> {
        Ok(self.beds.clone())
    }

    fn all_users(&self) -> Result<Vec<(ActorId, UserProfile)>, BackendError> {
        Ok(self.users.clone())
    }
}
