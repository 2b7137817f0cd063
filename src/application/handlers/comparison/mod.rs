//! Comparison query handlers.
//!
//! Dispatch validated requests to the comparison engine, log advisories
//! and, for pairwise requests, consult the calculation cache.

mod compare_multi;
mod compare_pair;

pub use compare_multi::{CompareMultiHandler, CompareMultiQuery, CompareMultiResult};
pub use compare_pair::{ComparePairHandler, ComparePairQuery, ComparePairResult};
