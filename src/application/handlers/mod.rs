//! Application handlers.
//!
//! Query handlers that orchestrate domain operations.

pub mod comparison;

pub use comparison::{
    CompareMultiHandler, CompareMultiQuery, CompareMultiResult, ComparePairHandler,
    ComparePairQuery, ComparePairResult,
};
