//! Request validation for comparison endpoints.
//!
//! Every violated field is collected and reported together, keyed by
//! its JSON path. Bounds here are tighter than the engine's own checks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::application::handlers::{CompareMultiQuery, ComparePairQuery};
use crate::domain::comparison::{CostOption, MIN_OPTIONS};
use crate::domain::foundation::{HourlyWage, ValidationError};

use super::dto::{CalculationRequest, MultiComparisonRequest, OptionInput};

/// Upper bound for `timeMinutes` (one week).
pub const MAX_TIME_MINUTES: i64 = 10_080;

/// Upper bound for `directCost`.
pub const MAX_DIRECT_COST: i64 = 100_000_000;

/// Maximum number of options accepted by the multi endpoint.
pub const MAX_OPTIONS: usize = 5;

/// Field path to human-readable message, ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.insert(error.field(), error.reason());
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

fn check_range(
    errors: &mut FieldErrors,
    field: String,
    value: Option<i64>,
    min: i64,
    max: i64,
) -> Option<i64> {
    match value {
        None => {
            errors.push(ValidationError::missing_field(field));
            None
        }
        Some(v) if v < min || v > max => {
            errors.push(ValidationError::out_of_range(field, min, max, v));
            None
        }
        Some(v) => Some(v),
    }
}

fn check_wage(errors: &mut FieldErrors, value: Option<i64>) -> Option<i64> {
    check_range(
        errors,
        "hourlyWage".to_string(),
        value,
        HourlyWage::MIN,
        HourlyWage::MAX,
    )
}

fn check_option(
    errors: &mut FieldErrors,
    path: &str,
    input: Option<&OptionInput>,
) -> Option<CostOption> {
    let Some(input) = input else {
        errors.push(ValidationError::missing_field(path));
        return None;
    };

    let time_minutes = check_range(
        errors,
        format!("{path}.timeMinutes"),
        input.time_minutes,
        0,
        MAX_TIME_MINUTES,
    );
    let direct_cost = check_range(
        errors,
        format!("{path}.directCost"),
        input.direct_cost,
        0,
        MAX_DIRECT_COST,
    );

    Some(CostOption::new(time_minutes?, direct_cost?))
}

/// Validates a pairwise request into a query.
pub fn validate_calculation(
    request: &CalculationRequest,
) -> Result<ComparePairQuery, FieldErrors> {
    let mut errors = FieldErrors::new();

    let wage = check_wage(&mut errors, request.hourly_wage);
    let option_a = check_option(&mut errors, "optionA", request.option_a.as_ref());
    let option_b = check_option(&mut errors, "optionB", request.option_b.as_ref());

    match (wage, option_a, option_b) {
        (Some(hourly_wage), Some(option_a), Some(option_b)) if errors.is_empty() => {
            Ok(ComparePairQuery {
                hourly_wage,
                option_a,
                option_b,
            })
        }
        _ => Err(errors),
    }
}

/// Validates a multi-option request into a query.
pub fn validate_multi(request: &MultiComparisonRequest) -> Result<CompareMultiQuery, FieldErrors> {
    let mut errors = FieldErrors::new();

    let wage = check_wage(&mut errors, request.hourly_wage);

    let options = match &request.options {
        None => {
            errors.push(ValidationError::missing_field("options"));
            None
        }
        Some(inputs) if inputs.len() < MIN_OPTIONS || inputs.len() > MAX_OPTIONS => {
            errors.push(ValidationError::invalid_length(
                "options",
                MIN_OPTIONS,
                MAX_OPTIONS,
                inputs.len(),
            ));
            None
        }
        Some(inputs) => inputs
            .iter()
            .enumerate()
            .map(|(i, input)| check_option(&mut errors, &format!("options[{i}]"), Some(input)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Option<Vec<_>>>(),
    };

    match (wage, options) {
        (Some(hourly_wage), Some(options)) if errors.is_empty() => {
            Ok(CompareMultiQuery {
                hourly_wage,
                options,
            })
        }
        _ => Err(errors),
    }
}
