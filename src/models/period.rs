//! Chart period types
//!
//! A period type fixes both the bucket size and how many buckets make up one
//! chart window: seven days, four weeks, or six months.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a chart window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Seven single-day buckets
    Day,
    /// Four Monday-aligned week buckets
    #[default]
    Week,
    /// Six calendar-month buckets
    Month,
}

impl PeriodType {
    /// Number of buckets in one window
    pub const fn bucket_count(&self) -> u32 {
        match self {
            Self::Day => 7,
            Self::Week => 4,
            Self::Month => 6,
        }
    }

    /// Adjective used in chart titles ("Daily", "Weekly", "Monthly")
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::Day => "Daily",
            Self::Week => "Weekly",
            Self::Month => "Monthly",
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Day => write!(f, "Day"),
            Self::Week => write!(f, "Week"),
            Self::Month => write!(f, "Month"),
        }
    }
}

/// The (year, month) that lies `n` calendar months before `year`/`month`
///
/// Rolls back across year boundaries: one month before January 2025 is
/// December 2024.
pub fn months_before(year: i32, month: u32, n: u32) -> (i32, u32) {
    let index = year as i64 * 12 + (month as i64 - 1) - n as i64;
    (index.div_euclid(12) as i32, index.rem_euclid(12) as u32 + 1)
}

/// Error returned when a period name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown period '{0}' (expected day, week or month)")]
pub struct UnknownPeriod(pub String);

impl FromStr for PeriodType {
    type Err = UnknownPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "daily" | "d" => Ok(Self::Day),
            "week" | "weekly" | "w" => Ok(Self::Week),
            "month" | "monthly" | "m" => Ok(Self::Month),
            other => Err(UnknownPeriod(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_counts() {
        assert_eq!(PeriodType::Day.bucket_count(), 7);
        assert_eq!(PeriodType::Week.bucket_count(), 4);
        assert_eq!(PeriodType::Month.bucket_count(), 6);
    }

    #[test]
    fn test_months_before_rolls_over_years() {
        assert_eq!(months_before(2025, 3, 0), (2025, 3));
        assert_eq!(months_before(2025, 3, 2), (2025, 1));
        assert_eq!(months_before(2025, 1, 1), (2024, 12));
        assert_eq!(months_before(2025, 2, 14), (2023, 12));
        assert_eq!(months_before(2025, 12, 24), (2023, 12));
    }

    #[test]
    fn test_parse() {
        assert_eq!("Week".parse::<PeriodType>().unwrap(), PeriodType::Week);
        assert_eq!("monthly".parse::<PeriodType>().unwrap(), PeriodType::Month);
        assert!("fortnight".parse::<PeriodType>().is_err());
    }
}
