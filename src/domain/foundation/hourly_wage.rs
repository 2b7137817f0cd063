//! Hourly wage value object (currency units per hour).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PerMinuteRate, ValidationError};

/// A wage of at least one currency unit per hour.
///
/// The upper bound is a request-level concern; see [`HourlyWage::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct HourlyWage(u64);

impl HourlyWage {
    /// Smallest accepted wage.
    pub const MIN: i64 = 1;

    /// Largest wage accepted from API callers.
    pub const MAX: i64 = 100_000_000;

    /// Wages at or above this value are flagged as implausible.
    pub const WARNING_THRESHOLD: u64 = 1_000_000;

    /// Creates an HourlyWage, returning error if below one.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::below_minimum("hourlyWage", Self::MIN, value));
        }
        Ok(Self(value.unsigned_abs()))
    }

    /// Returns the value as u64.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Value of one minute at this wage, floored to whole currency units.
    pub fn per_minute(&self) -> PerMinuteRate {
        PerMinuteRate::from_wage(*self)
    }

    /// True when the wage is high enough to suggest a data-entry mistake.
    pub fn is_unusually_high(&self) -> bool {
        self.0 >= Self::WARNING_THRESHOLD
    }
}

impl TryFrom<i64> for HourlyWage {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<HourlyWage> for u64 {
    fn from(wage: HourlyWage) -> Self {
        wage.0
    }
}

impl fmt::Display for HourlyWage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/h", self.0)
    }
}
