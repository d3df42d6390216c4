//! Field-level validation errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Field;

pub const EMPTY_MESSAGE: &str = "Should not be empty";

/// A single rule violation attached to one parameter key.
///
/// Validation never fails with a `Result::Err`; every violated rule yields
/// one of these so callers can show all problems at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The error raised for a required field that is absent or blank.
    pub fn empty(field: Field) -> Self {
        Self::new(field, EMPTY_MESSAGE)
    }
}
