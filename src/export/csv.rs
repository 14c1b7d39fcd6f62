//! CSV export of ledger records

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

const HEADER: [&str; 6] = ["ID", "Date", "Kind", "Description", "Category", "Amount"];

/// Write records as CSV, one row per record in the given order
///
/// Amounts are positive; the Kind column gives the direction.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(HEADER)
        .map_err(|e| TallyError::Export(e.to_string()))?;

    for txn in transactions {
        let category = txn.category.map(|c| c.name()).unwrap_or_default();
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
                txn.kind.to_string(),
                txn.description.clone(),
                category.to_string(),
                format!("{:.2}", txn.amount.as_f64()),
            ])
            .map_err(|e| TallyError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_export() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 2)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        let records = vec![
            Transaction::income(Money::from_cents(270_000), "Monthly Salary", ts),
            Transaction::expense(
                Money::from_cents(1_299),
                "Lunch, with team",
                ExpenseCategory::Food,
                ts,
            ),
        ];

        let mut output = Vec::new();
        export_transactions_csv(&records, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "ID,Date,Kind,Description,Category,Amount");
        assert!(lines[1].ends_with(",2025-03-02 14:05:00,Income,Monthly Salary,,2700.00"));
        assert!(lines[2].ends_with(",Expense,\"Lunch, with team\",Food,12.99"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_export_empty() {
        let mut output = Vec::new();
        export_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Date,Kind,Description,Category,Amount\n"
        );
    }
}
