//! Cost breakdown calculator.
//!
//! `total_cost = direct_cost + floor(hourly_wage / 60) * time_minutes`,
//! in exact integer arithmetic.

use serde::Serialize;

use crate::domain::foundation::{HourlyWage, PerMinuteRate, ValidationError};

use super::{ComparisonError, CostOption};

/// Direct, time and total cost of one option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub direct_cost: u64,
    pub time_cost: u64,
    pub total_cost: u64,
}

/// Computes the breakdown of `option` at a precomputed per-minute rate.
///
/// Negative time or cost is rejected with the bare field name
/// (`timeMinutes`, `directCost`); comparators prefix it with the option path.
pub fn compute_breakdown(
    rate: PerMinuteRate,
    option: &CostOption,
) -> Result<CostBreakdown, ComparisonError> {
    let time_minutes = non_negative("timeMinutes", option.time_minutes)?;
    let direct_cost = non_negative("directCost", option.direct_cost)?;

    let time_cost = rate
        .time_cost(time_minutes)
        .ok_or_else(|| overflow("timeMinutes"))?;
    let total_cost = direct_cost
        .checked_add(time_cost)
        .ok_or_else(|| overflow("directCost"))?;

    Ok(CostBreakdown {
        direct_cost,
        time_cost,
        total_cost,
    })
}

/// Computes the breakdown of `option` directly from a raw hourly wage.
pub fn breakdown_for_wage(
    hourly_wage: i64,
    option: &CostOption,
) -> Result<CostBreakdown, ComparisonError> {
    let wage = HourlyWage::try_new(hourly_wage)?;
    compute_breakdown(wage.per_minute(), option)
}

fn non_negative(field: &str, value: i64) -> Result<u64, ComparisonError> {
    u64::try_from(value).map_err(|_| ValidationError::below_minimum(field, 0, value).into())
}

fn overflow(field: &str) -> ComparisonError {
    ComparisonError::invalid_input(field, "cost exceeds the representable range")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(wage: i64) -> PerMinuteRate {
        HourlyWage::try_new(wage).unwrap().per_minute()
    }

    #[test]
    fn breakdown_adds_time_cost_to_direct_cost() {
        let breakdown = compute_breakdown(rate(15_000), &CostOption::new(10, 3_000)).unwrap();
        assert_eq!(
            breakdown,
            CostBreakdown {
                direct_cost: 3_000,
                time_cost: 2_500,
                total_cost: 5_500,
            }
        );
    }

    #[test]
    fn breakdown_uses_floored_rate() {
        // 20000 / 60 = 333.33.. -> 333 per minute
        let breakdown = compute_breakdown(rate(20_000), &CostOption::new(10, 14_000)).unwrap();
        assert_eq!(breakdown.time_cost, 3_330);
        assert_eq!(breakdown.total_cost, 17_330);
    }

    #[test]
    fn zero_minutes_costs_nothing_extra() {
        let breakdown = compute_breakdown(rate(15_000), &CostOption::new(0, 5_000)).unwrap();
        assert_eq!(breakdown.time_cost, 0);
        assert_eq!(breakdown.total_cost, 5_000);
    }

    #[test]
    fn free_option_costs_only_time() {
        let breakdown = compute_breakdown(rate(15_000), &CostOption::new(120, 0)).unwrap();
        assert_eq!(breakdown.direct_cost, 0);
        assert_eq!(breakdown.time_cost, 30_000);
        assert_eq!(breakdown.total_cost, 30_000);
    }

    #[test]
    fn wage_below_sixty_truncates_time_cost_to_zero() {
        let breakdown = breakdown_for_wage(1, &CostOption::new(10_080, 700)).unwrap();
        assert_eq!(breakdown.time_cost, 0);
        assert_eq!(breakdown.total_cost, 700);

        let breakdown = breakdown_for_wage(59, &CostOption::new(600, 0)).unwrap();
        assert_eq!(breakdown.time_cost, 0);
    }

    #[test]
    fn negative_minutes_are_rejected() {
        let err = compute_breakdown(rate(15_000), &CostOption::new(-1, 3_000)).unwrap_err();
        assert_eq!(err.field(), "timeMinutes");
        assert_eq!(err.reason(), "must be at least 0, got -1");
    }

    #[test]
    fn negative_direct_cost_is_rejected() {
        let err = compute_breakdown(rate(15_000), &CostOption::new(10, -1)).unwrap_err();
        assert_eq!(err.field(), "directCost");
    }

    #[test]
    fn wage_below_one_is_rejected() {
        let err = breakdown_for_wage(0, &CostOption::new(10, 3_000)).unwrap_err();
        assert_eq!(err.field(), "hourlyWage");
    }

    #[test]
    fn overflow_is_rejected_instead_of_wrapping() {
        let err =
            compute_breakdown(rate(HourlyWage::MAX), &CostOption::new(i64::MAX, 0)).unwrap_err();
        assert_eq!(err.field(), "timeMinutes");

        let top = rate(HourlyWage::MAX);
        let minutes = (u64::MAX / top.value()) as i64;
        let err = compute_breakdown(top, &CostOption::new(minutes, i64::MAX)).unwrap_err();
        assert_eq!(err.field(), "directCost");
    }

    #[test]
    fn breakdown_serializes_camel_case() {
        let breakdown = compute_breakdown(rate(15_000), &CostOption::new(10, 3_000)).unwrap();
        let json = serde_json::to_value(breakdown).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"directCost": 3000, "timeCost": 2500, "totalCost": 5500})
        );
    }
}
