//! Plausibility checks on inputs and results.
//!
//! Advisories never change a result; callers log them so implausible
//! entries (minutes typed as hours, an extra zero on the wage) are visible.

use std::fmt;

use crate::domain::foundation::HourlyWage;

use super::{CostBreakdown, CostOption, MultiResult, PairwiseResult};

/// Totals at or above this value are flagged.
pub const HIGH_TOTAL_COST: u64 = 10_000_000;

/// Totals above this value are flagged as almost certainly wrong.
pub const EXTREME_TOTAL_COST: u64 = 1_000_000_000;

/// Time cost more than this multiple of the direct cost is flagged.
pub const TIME_COST_DOMINANCE_FACTOR: u64 = 100;

/// A non-fatal warning about a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostAdvisory {
    HighWage {
        hourly_wage: u64,
    },
    HighTotalCost {
        option: String,
        total_cost: u64,
    },
    ExtremeTotalCost {
        option: String,
        total_cost: u64,
    },
    TimeCostDominates {
        option: String,
        direct_cost: u64,
        time_cost: u64,
    },
    RateTruncatedToZero {
        option: String,
        time_minutes: u64,
    },
}

impl fmt::Display for CostAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostAdvisory::HighWage { hourly_wage } => {
                write!(f, "unusually high hourly wage: {}", hourly_wage)
            }
            CostAdvisory::HighTotalCost { option, total_cost } => {
                write!(f, "option {} has a high total cost: {}", option, total_cost)
            }
            CostAdvisory::ExtremeTotalCost { option, total_cost } => write!(
                f,
                "option {} total cost {} exceeds {}; check wage and minutes",
                option, total_cost, EXTREME_TOTAL_COST
            ),
            CostAdvisory::TimeCostDominates {
                option,
                direct_cost,
                time_cost,
            } => write!(
                f,
                "option {} time cost {} is over {}x its direct cost {}; minutes may have been entered as hours",
                option, time_cost, TIME_COST_DOMINANCE_FACTOR, direct_cost
            ),
            CostAdvisory::RateTruncatedToZero {
                option,
                time_minutes,
            } => write!(
                f,
                "option {} spends {} minutes but the wage is below 60 per hour, so time costs nothing",
                option, time_minutes
            ),
        }
    }
}

/// Advisories for a single option's breakdown.
pub fn assess_option(
    label: &str,
    time_minutes: u64,
    breakdown: &CostBreakdown,
) -> Vec<CostAdvisory> {
    let mut advisories = Vec::new();

    if breakdown.total_cost >= HIGH_TOTAL_COST {
        advisories.push(CostAdvisory::HighTotalCost {
            option: label.to_string(),
            total_cost: breakdown.total_cost,
        });
    }
    if breakdown.total_cost > EXTREME_TOTAL_COST {
        advisories.push(CostAdvisory::ExtremeTotalCost {
            option: label.to_string(),
            total_cost: breakdown.total_cost,
        });
    }
    if breakdown.direct_cost > 0
        && breakdown.time_cost > breakdown.direct_cost.saturating_mul(TIME_COST_DOMINANCE_FACTOR)
    {
        advisories.push(CostAdvisory::TimeCostDominates {
            option: label.to_string(),
            direct_cost: breakdown.direct_cost,
            time_cost: breakdown.time_cost,
        });
    }
    if time_minutes > 0 && breakdown.time_cost == 0 {
        advisories.push(CostAdvisory::RateTruncatedToZero {
            option: label.to_string(),
            time_minutes,
        });
    }

    advisories
}

/// Advisories for a pairwise comparison.
pub fn assess_pair(
    wage: HourlyWage,
    option_a: &CostOption,
    option_b: &CostOption,
    result: &PairwiseResult,
) -> Vec<CostAdvisory> {
    let mut advisories = assess_wage(wage);
    advisories.extend(assess_option(
        "A",
        option_a.time_minutes.unsigned_abs(),
        &result.option_a,
    ));
    advisories.extend(assess_option(
        "B",
        option_b.time_minutes.unsigned_abs(),
        &result.option_b,
    ));
    advisories
}

/// Advisories for a multi-option comparison.
pub fn assess_multi(
    wage: HourlyWage,
    options: &[CostOption],
    result: &MultiResult,
) -> Vec<CostAdvisory> {
    let mut advisories = assess_wage(wage);
    for (option, entry) in options.iter().zip(&result.results) {
        advisories.extend(assess_option(
            &entry.option_name,
            option.time_minutes.unsigned_abs(),
            &entry.breakdown,
        ));
    }
    advisories
}

fn assess_wage(wage: HourlyWage) -> Vec<CostAdvisory> {
    if wage.is_unusually_high() {
        vec![CostAdvisory::HighWage {
            hourly_wage: wage.value(),
        }]
    } else {
        Vec::new()
    }
}
