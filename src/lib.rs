//! Opportunity Cost - Total-Cost Comparison Service
//!
//! Compares options by their true cost: the money paid plus the time
//! spent, valued at the caller's hourly wage.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
