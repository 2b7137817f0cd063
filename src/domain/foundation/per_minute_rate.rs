//! Per-minute value of time, derived from an hourly wage.

use serde::Serialize;
use std::fmt;

use super::HourlyWage;

/// `floor(hourly_wage / 60)` in whole currency units.
///
/// Computed once per comparison so every option is charged the same rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PerMinuteRate(u64);

impl PerMinuteRate {
    /// Minutes per hour.
    pub const MINUTES_PER_HOUR: u64 = 60;

    /// Derives the rate from a wage, truncating towards zero.
    pub fn from_wage(wage: HourlyWage) -> Self {
        Self(wage.value() / Self::MINUTES_PER_HOUR)
    }

    /// Returns the value as u64.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Cost of `minutes` at this rate, or `None` on overflow.
    pub fn time_cost(&self, minutes: u64) -> Option<u64> {
        self.0.checked_mul(minutes)
    }
}

impl fmt::Display for PerMinuteRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/min", self.0)
    }
}
