//! Pairwise comparison of two options, `A` and `B`.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::domain::foundation::HourlyWage;

use super::formula::{render_formula, FormulaEntry};
use super::{compute_breakdown, ComparisonError, CostBreakdown, CostOption};

/// Which option is cheaper overall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Recommendation {
    A,
    B,
    Equal,
}

impl Recommendation {
    /// Recommendation from two total costs.
    pub fn from_totals(total_a: u64, total_b: u64) -> Self {
        match total_a.cmp(&total_b) {
            Ordering::Less => Recommendation::A,
            Ordering::Greater => Recommendation::B,
            Ordering::Equal => Recommendation::Equal,
        }
    }

    /// The recommendation with `A` and `B` swapped.
    pub fn mirrored(self) -> Self {
        match self {
            Recommendation::A => Recommendation::B,
            Recommendation::B => Recommendation::A,
            Recommendation::Equal => Recommendation::Equal,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recommendation::A => "A",
            Recommendation::B => "B",
            Recommendation::Equal => "Equal",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of comparing two options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PairwiseResult {
    pub option_a: CostBreakdown,
    pub option_b: CostBreakdown,
    /// `|total_a - total_b|`
    pub cost_difference: u64,
    pub recommendation: Recommendation,
    pub formula: String,
}

/// Compares `option_a` and `option_b` at `hourly_wage`.
///
/// Both options are charged the same per-minute rate. Field paths in errors
/// are `hourlyWage`, `optionA.*` and `optionB.*`.
pub fn compare_pair(
    hourly_wage: i64,
    option_a: &CostOption,
    option_b: &CostOption,
) -> Result<PairwiseResult, ComparisonError> {
    let wage = HourlyWage::try_new(hourly_wage)?;
    let rate = wage.per_minute();

    let breakdown_a =
        compute_breakdown(rate, option_a).map_err(|e| e.nested_under("optionA"))?;
    let breakdown_b =
        compute_breakdown(rate, option_b).map_err(|e| e.nested_under("optionB"))?;

    let formula = render_formula(
        wage,
        rate,
        &[
            FormulaEntry {
                label: "A".to_string(),
                time_minutes: option_a.time_minutes.unsigned_abs(),
                breakdown: breakdown_a,
            },
            FormulaEntry {
                label: "B".to_string(),
                time_minutes: option_b.time_minutes.unsigned_abs(),
                breakdown: breakdown_b,
            },
        ],
    );

    Ok(PairwiseResult {
        option_a: breakdown_a,
        option_b: breakdown_b,
        cost_difference: breakdown_a.total_cost.abs_diff(breakdown_b.total_cost),
        recommendation: Recommendation::from_totals(
            breakdown_a.total_cost,
            breakdown_b.total_cost,
        ),
        formula,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_a_cheaper_when_faster() {
        let result =
            compare_pair(15_000, &CostOption::new(10, 3_000), &CostOption::new(40, 2_300)).unwrap();

        assert_eq!(result.option_a.time_cost, 2_500);
        assert_eq!(result.option_a.total_cost, 5_500);
        assert_eq!(result.option_b.time_cost, 10_000);
        assert_eq!(result.option_b.total_cost, 12_300);
        assert_eq!(result.recommendation, Recommendation::A);
        assert_eq!(result.cost_difference, 6_800);
    }

    #[test]
    fn option_b_cheaper_with_floored_rate() {
        let result =
            compare_pair(20_000, &CostOption::new(60, 6_000), &CostOption::new(10, 14_000))
                .unwrap();

        assert_eq!(result.option_a.time_cost, 19_980);
        assert_eq!(result.option_a.total_cost, 25_980);
        assert_eq!(result.option_b.time_cost, 3_330);
        assert_eq!(result.option_b.total_cost, 17_330);
        assert_eq!(result.recommendation, Recommendation::B);
        assert_eq!(result.cost_difference, 8_650);
    }

    #[test]
    fn equal_totals_recommend_neither() {
        // 10000 / 60 = 166 per minute; A: 1004 + 166 * 6 = 2000, B: 2000 + 0
        let result =
            compare_pair(10_000, &CostOption::new(6, 1_004), &CostOption::new(0, 2_000)).unwrap();

        assert_eq!(result.recommendation, Recommendation::Equal);
        assert_eq!(result.cost_difference, 0);
    }

    #[test]
    fn swapping_options_mirrors_recommendation() {
        let a = CostOption::new(10, 3_000);
        let b = CostOption::new(40, 2_300);

        let forward = compare_pair(15_000, &a, &b).unwrap();
        let backward = compare_pair(15_000, &b, &a).unwrap();

        assert_eq!(forward.recommendation.mirrored(), backward.recommendation);
        assert_eq!(forward.cost_difference, backward.cost_difference);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = CostOption::new(35, 1_250);
        let b = CostOption::new(5, 9_900);
        assert_eq!(
            compare_pair(31_000, &a, &b).unwrap(),
            compare_pair(31_000, &a, &b).unwrap()
        );
    }

    #[test]
    fn minimum_wage_charges_no_time() {
        let result =
            compare_pair(1, &CostOption::new(600, 100), &CostOption::new(0, 200)).unwrap();
        assert_eq!(result.option_a.time_cost, 0);
        assert_eq!(result.option_b.time_cost, 0);
        assert_eq!(result.recommendation, Recommendation::A);
    }

    #[test]
    fn errors_carry_option_path() {
        let err = compare_pair(15_000, &CostOption::new(-1, 0), &CostOption::new(0, 0))
            .unwrap_err();
        assert_eq!(err.field(), "optionA.timeMinutes");

        let err = compare_pair(15_000, &CostOption::new(0, 0), &CostOption::new(0, -1))
            .unwrap_err();
        assert_eq!(err.field(), "optionB.directCost");

        let err = compare_pair(0, &CostOption::new(0, 0), &CostOption::new(0, 0)).unwrap_err();
        assert_eq!(err.field(), "hourlyWage");
    }

    #[test]
    fn formula_reflects_result_numbers() {
        let result =
            compare_pair(20_000, &CostOption::new(60, 6_000), &CostOption::new(10, 14_000))
                .unwrap();

        assert!(result.formula.contains("floor(20,000 / 60) = 333 per minute"));
        assert!(result.formula.contains("A: 6,000 + 333 × 60 min = 6,000 + 19,980 = 25,980"));
        assert!(result.formula.contains("B: 14,000 + 333 × 10 min = 14,000 + 3,330 = 17,330"));
    }

    #[test]
    fn result_serializes_camel_case() {
        let result =
            compare_pair(15_000, &CostOption::new(10, 3_000), &CostOption::new(40, 2_300)).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["recommendation"], "A");
        assert_eq!(json["costDifference"], 6_800);
        assert_eq!(json["optionA"]["totalCost"], 5_500);
        assert_eq!(json["optionB"]["timeCost"], 10_000);
        assert!(json["formula"].is_string());
    }

    #[test]
    fn equal_recommendation_serializes_as_word() {
        assert_eq!(
            serde_json::to_string(&Recommendation::Equal).unwrap(),
            "\"Equal\""
        );
    }
}
