//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `CalculationCache` - Memoization of pairwise results

mod calculation_cache;

pub use calculation_cache::{CalculationCache, PairwiseCacheKey};
