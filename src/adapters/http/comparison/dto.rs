//! HTTP DTOs (Data Transfer Objects) for comparison endpoints.
//!
//! Request fields are optional so that a missing value is reported per
//! field by validation instead of failing deserialization as a whole.
//! The domain results are already designed for serialization, so we
//! re-export them directly as response bodies.

pub use crate::domain::comparison::{
    CostBreakdown, MultiResult, OptionResult, PairwiseResult, Recommendation,
};

use serde::{Deserialize, Serialize};

use super::validation::FieldErrors;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One option as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionInput {
    /// Time spent, in minutes.
    pub time_minutes: Option<i64>,
    /// Monetary price.
    pub direct_cost: Option<i64>,
}

/// Request body for `POST /api/calculate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub hourly_wage: Option<i64>,
    pub option_a: Option<OptionInput>,
    pub option_b: Option<OptionInput>,
}

/// Request body for `POST /api/calculate/multi`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiComparisonRequest {
    pub hourly_wage: Option<i64>,
    pub options: Option<Vec<OptionInput>>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    /// Field path to message, e.g. `"optionA.timeMinutes": "is required"`.
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub field_errors: FieldErrors,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field_errors: FieldErrors::default(),
        }
    }

    pub fn with_field_errors(mut self, field_errors: FieldErrors) -> Self {
        self.field_errors = field_errors;
        self
    }
}
