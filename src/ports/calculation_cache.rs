//! CalculationCache port - Interface for memoizing pairwise calculations.
//!
//! Comparisons are deterministic, so a result computed once for a given
//! input tuple can be served again without recomputation. The cache lives
//! outside the comparison engine, which stays pure.

use async_trait::async_trait;
use std::fmt;

use crate::domain::comparison::{CostOption, PairwiseResult};
use crate::domain::foundation::DomainError;

/// Complete input of a pairwise calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairwiseCacheKey {
    pub hourly_wage: i64,
    pub option_a: CostOption,
    pub option_b: CostOption,
}

impl PairwiseCacheKey {
    pub fn new(hourly_wage: i64, option_a: CostOption, option_b: CostOption) -> Self {
        Self {
            hourly_wage,
            option_a,
            option_b,
        }
    }
}

impl fmt::Display for PairwiseCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.hourly_wage,
            self.option_a.time_minutes,
            self.option_a.direct_cost,
            self.option_b.time_minutes,
            self.option_b.direct_cost
        )
    }
}

/// Port for caching pairwise results.
///
/// Implementations must ensure:
/// - A stored result is only returned for exactly the same key
/// - Size is bounded; the oldest entries are evicted first
/// - Errors are propagated to the caller, who may fall back to computing
#[async_trait]
pub trait CalculationCache: Send + Sync {
    /// Look up a previously stored result.
    async fn get(&self, key: &PairwiseCacheKey) -> Result<Option<PairwiseResult>, DomainError>;

    /// Store a result, evicting the oldest entry when full.
    async fn put(&self, key: PairwiseCacheKey, result: PairwiseResult) -> Result<(), DomainError>;

    /// Number of stored results.
    async fn len(&self) -> Result<usize, DomainError>;
}
