//! In-memory calculation cache for single-server deployments.
//!
//! Entries are evicted in insertion order once the configured capacity
//! is reached. Not shared between processes.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::CacheConfig;
use crate::domain::comparison::PairwiseResult;
use crate::domain::foundation::DomainError;
use crate::ports::{CalculationCache, PairwiseCacheKey};

/// Bounded in-memory cache of pairwise results.
#[derive(Debug, Clone)]
pub struct InMemoryCalculationCache {
    /// Maximum number of stored results.
    max_entries: usize,
    state: Arc<RwLock<CacheState>>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<PairwiseCacheKey, PairwiseResult>,
    /// Keys in insertion order, oldest first.
    order: VecDeque<PairwiseCacheKey>,
}

impl InMemoryCalculationCache {
    /// Create a cache holding at most `max_entries` results (minimum one).
    pub fn new(max_entries: usize) -> Self {
        Self {
            max_entries: max_entries.max(1),
            state: Arc::new(RwLock::new(CacheState::default())),
        }
    }

    /// Create a cache sized from configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.max_entries)
    }

    /// Capacity of this cache.
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }
}

#[async_trait]
impl CalculationCache for InMemoryCalculationCache {
    async fn get(&self, key: &PairwiseCacheKey) -> Result<Option<PairwiseResult>, DomainError> {
        let state = self.state.read().await;
        let cached = state.entries.get(key).cloned();
        if cached.is_some() {
            tracing::debug!(key = %key, "cache hit");
        } else {
            tracing::debug!(key = %key, "cache miss");
        }
        Ok(cached)
    }

    async fn put(&self, key: PairwiseCacheKey, result: PairwiseResult) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if state.entries.insert(key, result).is_some() {
            return Ok(());
        }
        state.order.push_back(key);

        while state.order.len() > self.max_entries {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
                tracing::debug!(key = %oldest, "cache entry evicted");
            }
        }

        tracing::debug!(key = %key, size = state.entries.len(), "cache store");
        Ok(())
    }

    async fn len(&self) -> Result<usize, DomainError> {
        Ok(self.state.read().await.entries.len())
    }
}
