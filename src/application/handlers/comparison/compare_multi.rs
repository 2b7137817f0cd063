//! CompareMultiHandler - Query handler for comparing several options.

use tracing::{info, warn};

use crate::domain::comparison::{
    assess_multi, compare_multi, ComparisonError, CostOption, MultiResult,
};
use crate::domain::foundation::HourlyWage;

/// Query to compare several options against each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareMultiQuery {
    pub hourly_wage: i64,
    /// Options in display order (must be at least 2).
    pub options: Vec<CostOption>,
}

/// Result of successful multi-option comparison query.
pub type CompareMultiResult = MultiResult;

/// Handler for multi-option comparisons.
///
/// Stateless; results are not cached.
#[derive(Debug, Default, Clone, Copy)]
pub struct CompareMultiHandler;

impl CompareMultiHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: CompareMultiQuery) -> Result<CompareMultiResult, ComparisonError> {
        info!(
            hourly_wage = query.hourly_wage,
            option_count = query.options.len(),
            "multi-option comparison requested"
        );

        let result = compare_multi(query.hourly_wage, &query.options)?;

        let wage = HourlyWage::try_new(query.hourly_wage)?;
        for advisory in assess_multi(wage, &query.options, &result) {
            warn!(%advisory, "implausible comparison input");
        }

        info!(
            recommended_option = ?result.recommended_option,
            min_total_cost = result.min_total_cost,
            max_total_cost = result.max_total_cost,
            "multi-option comparison complete"
        );

        Ok(result)
    }
}
