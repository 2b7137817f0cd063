//! A single alternative to compare.

use serde::{Deserialize, Serialize};

/// Time and direct cost of one alternative.
///
/// Fields are signed so out-of-contract negatives reach the calculator and
/// are rejected there rather than wrapping during deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOption {
    /// Time spent, in minutes.
    pub time_minutes: i64,
    /// Monetary price, in currency units.
    pub direct_cost: i64,
}

impl CostOption {
    pub fn new(time_minutes: i64, direct_cost: i64) -> Self {
        Self {
            time_minutes,
            direct_cost,
        }
    }
}

/// Letter label for a 1-based option index: `A`, `B`, ..., `Z`, `AA`, `AB`, ...
pub fn option_label(index: usize) -> String {
    let mut remaining = index;
    let mut letters = Vec::new();
    while remaining > 0 {
        let offset = (remaining - 1) % 26;
        letters.push(char::from(b'A' + offset as u8));
        remaining = (remaining - 1) / 26;
    }
    letters.iter().rev().collect()
}
