//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `comparison` - Total-cost calculator, pairwise and multi-option comparators

pub mod comparison;
pub mod foundation;
