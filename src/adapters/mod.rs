//! Adapters - Implementations of port interfaces.

pub mod cache;
pub mod http;
