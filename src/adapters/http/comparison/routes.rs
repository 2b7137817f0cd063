//! Route configuration for comparison endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{calculate, calculate_multi, ComparisonAppState};

/// Creates the comparison router with all endpoints.
///
/// Routes:
/// - `POST /api/calculate` - Compare two options
/// - `POST /api/calculate/multi` - Compare two to five options
pub fn comparison_router() -> Router<ComparisonAppState> {
    Router::new()
        .route("/api/calculate", post(calculate))
        .route("/api/calculate/multi", post(calculate_multi))
}
