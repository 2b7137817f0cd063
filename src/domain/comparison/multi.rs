//! Comparison of two or more options.
//!
//! Generalizes the pairwise comparison: results keep input order, the
//! spread between the cheapest and the most expensive option is reported,
//! and the recommendation is withheld only when every option costs the same.

use serde::Serialize;

use crate::domain::foundation::HourlyWage;

use super::formula::{render_formula, FormulaEntry};
use super::{compute_breakdown, option_label, ComparisonError, CostBreakdown, CostOption};

/// Fewest options a comparison accepts.
pub const MIN_OPTIONS: usize = 2;

/// Breakdown of one option, tagged with its position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    /// 1-based position in the input.
    pub option_index: usize,
    /// Letter label: `A` for index 1, `B` for index 2, ...
    pub option_name: String,
    pub breakdown: CostBreakdown,
}

/// Outcome of comparing several options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiResult {
    /// One entry per option, in input order.
    pub results: Vec<OptionResult>,
    pub min_total_cost: u64,
    pub max_total_cost: u64,
    /// `max_total_cost - min_total_cost`
    pub max_difference: u64,
    /// Index of the cheapest option; `None` when all totals are equal.
    pub recommended_option: Option<usize>,
    pub formula: String,
}

impl MultiResult {
    /// The recommended option's entry, if any.
    pub fn recommended(&self) -> Option<&OptionResult> {
        self.recommended_option
            .and_then(|index| index.checked_sub(1))
            .and_then(|i| self.results.get(i))
    }

    /// True when every option has the same total cost.
    pub fn all_equal(&self) -> bool {
        self.max_difference == 0
    }
}

/// Compares `options` at `hourly_wage`.
///
/// When several (but not all) options share the minimum total, the first
/// one in input order is recommended. Field paths in errors are
/// `hourlyWage`, `options` and `options[i].*` (0-based `i`).
pub fn compare_multi(
    hourly_wage: i64,
    options: &[CostOption],
) -> Result<MultiResult, ComparisonError> {
    if options.len() < MIN_OPTIONS {
        return Err(ComparisonError::invalid_input(
            "options",
            format!(
                "at least {} options are required, got {}",
                MIN_OPTIONS,
                options.len()
            ),
        ));
    }

    let wage = HourlyWage::try_new(hourly_wage)?;
    let rate = wage.per_minute();

    let mut results = Vec::with_capacity(options.len());
    let mut entries = Vec::with_capacity(options.len());
    for (position, option) in options.iter().enumerate() {
        let breakdown = compute_breakdown(rate, option)
            .map_err(|e| e.nested_under(&format!("options[{}]", position)))?;
        let option_index = position + 1;
        let option_name = option_label(option_index);

        entries.push(FormulaEntry {
            label: option_name.clone(),
            time_minutes: option.time_minutes.unsigned_abs(),
            breakdown,
        });
        results.push(OptionResult {
            option_index,
            option_name,
            breakdown,
        });
    }

    let totals = results.iter().map(|r| r.breakdown.total_cost);
    let min_total_cost = totals.clone().min().unwrap_or_default();
    let max_total_cost = totals.max().unwrap_or_default();
    let recommended_option = if min_total_cost == max_total_cost {
        None
    } else {
        results
            .iter()
            .find(|r| r.breakdown.total_cost == min_total_cost)
            .map(|r| r.option_index)
    };

    Ok(MultiResult {
        formula: render_formula(wage, rate, &entries),
        results,
        min_total_cost,
        max_total_cost,
        max_difference: max_total_cost - min_total_cost,
        recommended_option,
    })
}

#[cfg(test)]
#[path = "multi_test.rs"]
mod multi_test;
