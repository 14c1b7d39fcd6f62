//! Ledger record display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Transaction;

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format records as a table, newest first
pub fn format_transaction_list(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No records found.".to_string();
    }

    let mut sorted = transactions.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let rows = sorted.into_iter().map(|txn| TransactionRow {
        id: txn.id.to_string(),
        date: txn.timestamp.format("%m/%d %H:%M").to_string(),
        description: truncate(&txn.description, 30),
        category: txn.category.map(|c| c.name().to_string()).unwrap_or_default(),
        amount: txn.amount.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::psql()).to_string()
}

/// Format one record's details
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", txn.kind, txn.id));
    output.push_str(&format!("  Description: {}\n", txn.description));
    output.push_str(&format!(
        "  Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    if let Some(category) = txn.category {
        output.push_str(&format!("  Category:    {}\n", category));
    }
    output.push_str(&format!(
        "  Entered:     {}\n",
        txn.timestamp.format("%Y-%m-%d %H:%M")
    ));

    output
}
