//! Errors raised by the comparison engine.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// A value outside the calculator's contract reached the engine.
///
/// Fatal to the single call; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

impl ComparisonError {
    /// Creates an invalid input error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ComparisonError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Path of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ComparisonError::InvalidInput { field, .. } => field,
        }
    }

    /// Why the value was rejected.
    pub fn reason(&self) -> &str {
        match self {
            ComparisonError::InvalidInput { reason, .. } => reason,
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidInput
    }

    /// Prefixes the field path, e.g. `timeMinutes` becomes `optionA.timeMinutes`.
    pub(crate) fn nested_under(self, parent: &str) -> Self {
        match self {
            ComparisonError::InvalidInput { field, reason } => ComparisonError::InvalidInput {
                field: format!("{}.{}", parent, field),
                reason,
            },
        }
    }
}

impl From<ValidationError> for ComparisonError {
    fn from(err: ValidationError) -> Self {
        ComparisonError::invalid_input(err.field(), err.reason())
    }
}
