//! Ledger repository for JSON storage
//!
//! Manages loading and saving ledger records to ledger.json

use std::path::{Path, PathBuf};

use crate::error::TallyResult;
use crate::services::{Ledger, LedgerData};

use super::file_io::{read_json, write_json_atomic};

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger, empty if nothing has been saved yet
    ///
    /// Stored records are validated and the totals recomputed.
    pub fn load(&self) -> TallyResult<Ledger> {
        let data: LedgerData = read_json(&self.path)?;
        Ledger::from_data(data)
    }

    pub fn save(&self, ledger: &Ledger) -> TallyResult<()> {
        write_json_atomic(&self.path, &ledger.to_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));

        let ts = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add_income(Money::from_cents(270_000), "Monthly Salary", ts)
            .unwrap();
        ledger
            .add_expense(Money::from_cents(3_450), "Dinner", ExpenseCategory::Food, ts)
            .unwrap();
        repo.save(&ledger).unwrap();

        let loaded = repo.load().unwrap();
        assert_eq!(loaded.all(), ledger.all());
        assert_eq!(loaded.totals(), ledger.totals());
    }

    #[test]
    fn test_load_missing_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_rejects_invalid_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");
        std::fs::write(
            &path,
            r#"{"transactions":[{"id":"5f0c8a4e-3b1d-4c55-9a8e-1d2f3a4b5c6d","kind":"income","amount":0,"description":"Zero","timestamp":"2025-01-01T09:00:00"}]}"#,
        )
        .unwrap();

        let repo = LedgerRepository::new(path);
        assert!(repo.load().unwrap_err().is_validation());
    }
}
