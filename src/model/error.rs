//! Model capability errors (parsing, validation).
//!
//! These are bounded and stable: model errors represent domain/refusal
//! states, not library implementation details.

use thiserror::Error;

/// Invalid identifier.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum InvalidId {
    #[error("actor id `{raw}` is invalid: {reason}")]
    Actor { raw: String, reason: String },
}

/// Invalid enum value received from the wire or the UI.
#[derive(Debug, Error, Clone)]
#[error("{field} value `{raw}` is invalid: expected one of {expected}")]
pub struct InvalidValue {
    pub field: &'static str,
    pub raw: String,
    pub expected: &'static str,
}

/// Canonical error enum for the model capability.
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ModelError {
    #[error(transparent)]
    InvalidId(#[from] InvalidId),
    #[error(transparent)]
    InvalidValue(#[from] InvalidValue),
}
