//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the opportunity cost domain.

mod errors;
mod hourly_wage;
mod per_minute_rate;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use hourly_wage::HourlyWage;
pub use per_minute_rate::PerMinuteRate;
