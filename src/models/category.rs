//! Expense categories
//!
//! The fixed set of categories an expense can be filed under. Incomes carry
//! no category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    #[default]
    Food,
    Transportation,
    Housing,
    Entertainment,
    Healthcare,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 6] = [
        Self::Food,
        Self::Transportation,
        Self::Housing,
        Self::Entertainment,
        Self::Healthcare,
        Self::Other,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a category name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown expense category '{0}' (expected one of: food, transportation, housing, entertainment, healthcare, other)")]
pub struct UnknownCategory(pub String);

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("food".parse::<ExpenseCategory>().unwrap(), ExpenseCategory::Food);
        assert_eq!(
            " HealthCare ".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Healthcare
        );
        assert!("groceries".parse::<ExpenseCategory>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ExpenseCategory::Transportation).unwrap();
        assert_eq!(json, "\"transportation\"");
    }
}
