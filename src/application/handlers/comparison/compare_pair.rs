//! ComparePairHandler - Query handler for comparing two options.
//!
//! Serves repeated inputs from the calculation cache when one is
//! configured. Cache failures never fail the request; the result is
//! computed instead.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::comparison::{
    assess_pair, compare_pair, ComparisonError, CostOption, PairwiseResult,
};
use crate::domain::foundation::HourlyWage;
use crate::ports::{CalculationCache, PairwiseCacheKey};

/// Query to compare option A against option B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparePairQuery {
    pub hourly_wage: i64,
    pub option_a: CostOption,
    pub option_b: CostOption,
}

/// Result of successful pairwise comparison query.
pub type ComparePairResult = PairwiseResult;

/// Handler for pairwise comparisons.
pub struct ComparePairHandler {
    cache: Option<Arc<dyn CalculationCache>>,
}

impl ComparePairHandler {
    pub fn new(cache: Option<Arc<dyn CalculationCache>>) -> Self {
        Self { cache }
    }

    pub async fn handle(
        &self,
        query: ComparePairQuery,
    ) -> Result<ComparePairResult, ComparisonError> {
        let key = PairwiseCacheKey::new(query.hourly_wage, query.option_a, query.option_b);

        if let Some(cache) = &self.cache {
            match cache.get(&key).await {
                Ok(Some(cached)) => {
                    info!(key = %key, "returning cached pairwise result");
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(e) => warn!(error = %e, "calculation cache lookup failed"),
            }
        }

        info!(
            hourly_wage = query.hourly_wage,
            a_direct_cost = query.option_a.direct_cost,
            a_time_minutes = query.option_a.time_minutes,
            b_direct_cost = query.option_b.direct_cost,
            b_time_minutes = query.option_b.time_minutes,
            "pairwise calculation requested"
        );

        let result = compare_pair(query.hourly_wage, &query.option_a, &query.option_b)?;

        let wage = HourlyWage::try_new(query.hourly_wage)?;
        for advisory in assess_pair(wage, &query.option_a, &query.option_b, &result) {
            warn!(%advisory, "implausible pairwise input");
        }

        info!(
            recommendation = %result.recommendation,
            cost_difference = result.cost_difference,
            "pairwise calculation complete"
        );

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put(key, result.clone()).await {
                warn!(error = %e, "failed to store pairwise result in cache");
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCalculationCache;
    use crate::domain::comparison::Recommendation;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementations
    // ─────────────────────────────────────────────────────────────────────

    struct FailingCache {
        puts: AtomicUsize,
    }

    #[async_trait]
    impl CalculationCache for FailingCache {
        async fn get(
            &self,
            _key: &PairwiseCacheKey,
        ) -> Result<Option<PairwiseResult>, DomainError> {
            Err(DomainError::new(ErrorCode::CacheError, "Simulated failure"))
        }

        async fn put(
            &self,
            _key: PairwiseCacheKey,
            _result: PairwiseResult,
        ) -> Result<(), DomainError> {
            self.puts.fetch_add(1, Ordering::SeqCst);
            Err(DomainError::new(ErrorCode::CacheError, "Simulated failure"))
        }

        async fn len(&self) -> Result<usize, DomainError> {
            Ok(0)
        }
    }

    /// Cache that always answers with a fixed result.
    struct PrimedCache {
        result: PairwiseResult,
    }

    #[async_trait]
    impl CalculationCache for PrimedCache {
        async fn get(
            &self,
            _key: &PairwiseCacheKey,
        ) -> Result<Option<PairwiseResult>, DomainError> {
            Ok(Some(self.result.clone()))
        }

        async fn put(
            &self,
            _key: PairwiseCacheKey,
            _result: PairwiseResult,
        ) -> Result<(), DomainError> {
            panic!("cached results must not be stored again");
        }

        async fn len(&self) -> Result<usize, DomainError> {
            Ok(1)
        }
    }

    fn example_query() -> ComparePairQuery {
        ComparePairQuery {
            hourly_wage: 15_000,
            option_a: CostOption::new(10, 3_000),
            option_b: CostOption::new(40, 2_300),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_computes_without_cache() {
        let handler = ComparePairHandler::new(None);

        let result = handler.handle(example_query()).await.unwrap();

        assert_eq!(result.recommendation, Recommendation::A);
        assert_eq!(result.cost_difference, 6_800);
    }

    #[tokio::test]
    async fn test_stores_result_in_cache() {
        let cache = Arc::new(InMemoryCalculationCache::new(10));
        let handler = ComparePairHandler::new(Some(cache.clone()));

        let first = handler.handle(example_query()).await.unwrap();
        let second = handler.handle(example_query()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_returns_cached_result() {
        let mut cached =
            compare_pair(15_000, &CostOption::new(0, 1), &CostOption::new(0, 2)).unwrap();
        cached.formula = "cached".to_string();
        let handler = ComparePairHandler::new(Some(Arc::new(PrimedCache {
            result: cached.clone(),
        })));

        let result = handler.handle(example_query()).await.unwrap();

        assert_eq!(result, cached);
    }

    #[tokio::test]
    async fn test_cache_failures_fall_back_to_computation() {
        let cache = Arc::new(FailingCache {
            puts: AtomicUsize::new(0),
        });
        let handler = ComparePairHandler::new(Some(cache.clone()));

        let result = handler.handle(example_query()).await.unwrap();

        assert_eq!(result.recommendation, Recommendation::A);
        assert_eq!(cache.puts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_is_not_cached() {
        let cache = Arc::new(InMemoryCalculationCache::new(10));
        let handler = ComparePairHandler::new(Some(cache.clone()));
        let query = ComparePairQuery {
            option_b: CostOption::new(-1, 0),
            ..example_query()
        };

        let err = handler.handle(query).await.unwrap_err();

        assert_eq!(err.field(), "optionB.timeMinutes");
        assert_eq!(cache.len().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_high_wage_still_computes() {
        let handler = ComparePairHandler::new(None);
        let query = ComparePairQuery {
            hourly_wage: 5_000_000,
            ..example_query()
        };

        let result = handler.handle(query).await.unwrap();

        assert_eq!(result.recommendation, Recommendation::A);
    }
}
