//! HTTP handlers for comparison endpoints.
//!
//! These handlers connect Axum routes to application layer query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{CompareMultiHandler, ComparePairHandler};
use crate::domain::comparison::ComparisonError;
use crate::domain::foundation::ErrorCode;
use crate::ports::CalculationCache;

use super::dto::{
    CalculationRequest, ErrorResponse, MultiComparisonRequest, MultiResult, PairwiseResult,
};
use super::validation::{validate_calculation, validate_multi, FieldErrors};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Comparison API error that implements IntoResponse.
#[derive(Debug)]
pub enum ComparisonApiError {
    /// One or more request fields failed validation.
    Validation(FieldErrors),
    /// Body was not valid JSON or had the wrong shape.
    MalformedRequest(String),
    /// The engine rejected the input.
    InvalidInput(ComparisonError),
}

impl IntoResponse for ComparisonApiError {
    fn into_response(self) -> axum::response::Response {
        let error = match self {
            ComparisonApiError::Validation(field_errors) => {
                tracing::debug!(fields = field_errors.len(), "request failed validation");
                ErrorResponse::new(
                    ErrorCode::ValidationFailed.to_string(),
                    "Request validation failed",
                )
                .with_field_errors(field_errors)
            }
            ComparisonApiError::MalformedRequest(msg) => {
                tracing::debug!(error = %msg, "malformed request body");
                ErrorResponse::new(ErrorCode::MalformedRequest.to_string(), msg)
            }
            ComparisonApiError::InvalidInput(err) => {
                tracing::warn!(error = %err, "engine rejected validated input");
                let mut field_errors = FieldErrors::new();
                field_errors.insert(err.field(), err.reason());
                ErrorResponse::new(err.code().to_string(), err.to_string())
                    .with_field_errors(field_errors)
            }
        };
        (StatusCode::BAD_REQUEST, Json(error)).into_response()
    }
}

impl From<FieldErrors> for ComparisonApiError {
    fn from(errors: FieldErrors) -> Self {
        ComparisonApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ComparisonApiError {
    fn from(rejection: JsonRejection) -> Self {
        ComparisonApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<ComparisonError> for ComparisonApiError {
    fn from(error: ComparisonError) -> Self {
        ComparisonApiError::InvalidInput(error)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing comparison dependencies.
#[derive(Clone, Default)]
pub struct ComparisonAppState {
    /// Pairwise result cache; `None` disables caching.
    pub calculation_cache: Option<Arc<dyn CalculationCache>>,
}

impl ComparisonAppState {
    pub fn new(calculation_cache: Option<Arc<dyn CalculationCache>>) -> Self {
        Self { calculation_cache }
    }

    pub fn compare_pair_handler(&self) -> ComparePairHandler {
        ComparePairHandler::new(self.calculation_cache.clone())
    }

    pub fn compare_multi_handler(&self) -> CompareMultiHandler {
        CompareMultiHandler::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/calculate
///
/// Compares two options at the given hourly wage.
pub async fn calculate(
    State(state): State<ComparisonAppState>,
    body: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<PairwiseResult>, ComparisonApiError> {
    let Json(request) = body?;
    let query = validate_calculation(&request)?;

    let handler = state.compare_pair_handler();
    let result = handler.handle(query).await?;

    Ok(Json(result))
}

/// POST /api/calculate/multi
///
/// Compares two to five options at the given hourly wage.
pub async fn calculate_multi(
    State(state): State<ComparisonAppState>,
    body: Result<Json<MultiComparisonRequest>, JsonRejection>,
) -> Result<Json<MultiResult>, ComparisonApiError> {
    let Json(request) = body?;
    let query = validate_multi(&request)?;

    let handler = state.compare_multi_handler();
    let result = handler.handle(query)?;

    Ok(Json(result))
}
