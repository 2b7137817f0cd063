//! Calculation cache configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest cache size accepted by validation.
pub const MAX_CACHE_ENTRIES: usize = 100_000;

/// Pairwise result cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Serve repeated pairwise calculations from memory
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Entries kept before the oldest is evicted
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    /// Validate cache configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_entries == 0 || self.max_entries > MAX_CACHE_ENTRIES {
            return Err(ValidationError::InvalidCacheSize {
                max: MAX_CACHE_ENTRIES,
                actual: self.max_entries,
            });
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_max_entries() -> usize {
    100
}
