use thiserror::Error;

use crate::backend::BackendError;
use crate::model::ModelError;
use crate::prefs::PrefsError;

/// Crate-level convenience error.
///
/// Not a "god error": it is a thin wrapper over canonical capability errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Prefs(#[from] PrefsError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}
