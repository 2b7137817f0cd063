//! Comparison HTTP adapter module.
//!
//! Provides REST API endpoints for pairwise and multi-option comparisons.

pub mod dto;
pub mod handlers;
pub mod routes;
pub mod validation;

pub use dto::ErrorResponse;
pub use handlers::{ComparisonApiError, ComparisonAppState};
pub use routes::comparison_router;
pub use validation::FieldErrors;
