//! JSON export
//!
//! Exports the ledger and the to-do list to JSON with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;
use crate::services::{Ledger, Totals, TodoData, TodoList};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub totals: Totals,

    /// Ledger records in insertion order
    pub transactions: Vec<Transaction>,

    pub tasks: TodoData,
}

impl FullExport {
    pub fn new(ledger: &Ledger, todo: &TodoList) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            totals: ledger.totals(),
            transactions: ledger.all().to_vec(),
            tasks: todo.data().clone(),
        }
    }
}

/// Export everything as pretty-printed JSON
pub fn export_full_json<W: Write>(
    ledger: &Ledger,
    todo: &TodoList,
    writer: &mut W,
) -> TallyResult<()> {
    let export = FullExport::new(ledger, todo);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TallyError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let mut ledger = Ledger::new();
        ledger
            .add_income(Money::from_cents(50_000), "Freelance Work", ts)
            .unwrap();
        ledger
            .add_expense(Money::from_cents(4_000), "Gas", ExpenseCategory::Transportation, ts)
            .unwrap();
        let mut todo = TodoList::new();
        todo.add("File receipts", ts).unwrap();

        let mut output = Vec::new();
        export_full_json(&ledger, &todo, &mut output).unwrap();

        let export: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.transactions.len(), 2);
        assert_eq!(export.totals.balance(), Money::from_cents(46_000));
        assert_eq!(export.tasks.open.len(), 1);
    }
}
