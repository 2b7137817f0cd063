//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Comparisons are read-only queries: they never change state beyond the
//! optional result cache.

pub mod handlers;

pub use handlers::{
    CompareMultiHandler, CompareMultiQuery, CompareMultiResult, ComparePairHandler,
    ComparePairQuery, ComparePairResult,
};
