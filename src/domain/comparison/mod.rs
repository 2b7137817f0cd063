//! Comparison module - the total-cost computation engine.
//!
//! Pure functions converting an hourly wage and a set of options into
//! per-option breakdowns, a recommendation and a formula trace. Nothing
//! here performs I/O or keeps state between calls.

mod advisories;
mod breakdown;
mod errors;
mod formula;
mod multi;
mod option;
mod pairwise;

pub use advisories::{
    assess_multi, assess_option, assess_pair, CostAdvisory, EXTREME_TOTAL_COST, HIGH_TOTAL_COST,
    TIME_COST_DOMINANCE_FACTOR,
};
pub use breakdown::{breakdown_for_wage, compute_breakdown, CostBreakdown};
pub use errors::ComparisonError;
pub use formula::format_amount;
pub use multi::{compare_multi, MultiResult, OptionResult, MIN_OPTIONS};
pub use option::{option_label, CostOption};
pub use pairwise::{compare_pair, PairwiseResult, Recommendation};
