//! Income and expense CLI commands

use chrono::{NaiveDate, NaiveDateTime};
use clap::Subcommand;

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{TallyError, TallyResult};
use crate::models::{ExpenseCategory, Money, TransactionKind};
use crate::services::{Ledger, TransactionUpdate};
use crate::storage::Storage;

use super::open_ledger;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Amount (e.g., "2700" or "£2,700.00")
        amount: String,

        /// What the money was for
        description: String,

        /// Date of the income (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List incomes, newest first
    List {
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Change an income's amount or description
    Edit {
        /// Record ID (txn-xxxxxxxx or a UUID prefix)
        id: String,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an income
    Delete {
        /// Record ID (txn-xxxxxxxx or a UUID prefix)
        id: String,
    },
}

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,

        /// What the money was spent on
        description: String,

        /// Expense category
        #[arg(short, long, default_value = "food")]
        category: ExpenseCategory,

        /// Date of the expense (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Only show this category
        #[arg(short, long)]
        category: Option<ExpenseCategory>,

        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Change an expense's amount, description or category
    Edit {
        /// Record ID (txn-xxxxxxxx or a UUID prefix)
        id: String,

        #[arg(short, long)]
        amount: Option<String>,

        #[arg(short, long)]
        description: Option<String>,

        #[arg(short, long)]
        category: Option<ExpenseCategory>,
    },

    /// Delete an expense
    Delete {
        /// Record ID (txn-xxxxxxxx or a UUID prefix)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: IncomeCommands,
) -> TallyResult<()> {
    let mut ledger = open_ledger(storage, settings)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            amount,
            description,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let timestamp = resolve_timestamp(date.as_deref(), clock)?;

            let txn = ledger.add_income(amount, &description, timestamp)?;
            storage.ledger.save(&ledger)?;

            println!("Recorded income {}", txn.id);
            print_totals(&ledger, symbol);
        }

        IncomeCommands::List { limit } => {
            let incomes: Vec<_> = ledger.incomes().collect();
            let shown = newest(&incomes, limit);
            println!("{}", format_transaction_list(&shown, symbol));
            println!(
                "{} income(s), total {}",
                incomes.len(),
                ledger.totals().income.format_with_symbol(symbol)
            );
        }

        IncomeCommands::Edit {
            id,
            amount,
            description,
        } => {
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category: None,
            };
            edit(&mut ledger, storage, &id, TransactionKind::Income, update, symbol)?;
        }

        IncomeCommands::Delete { id } => {
            delete(&mut ledger, storage, &id, TransactionKind::Income, symbol)?;
        }
    }

    Ok(())
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: ExpenseCommands,
) -> TallyResult<()> {
    let mut ledger = open_ledger(storage, settings)?;
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let timestamp = resolve_timestamp(date.as_deref(), clock)?;

            let txn = ledger.add_expense(amount, &description, category, timestamp)?;
            storage.ledger.save(&ledger)?;

            println!("Recorded expense {}", txn.id);
            print_totals(&ledger, symbol);
        }

        ExpenseCommands::List { category, limit } => {
            let expenses: Vec<_> = ledger
                .expenses()
                .filter(|t| category.is_none() || t.category == category)
                .collect();
            let total: Money = expenses.iter().map(|t| t.amount).sum();
            let shown = newest(&expenses, limit);

            println!("{}", format_transaction_list(&shown, symbol));
            println!(
                "{} expense(s), total {}",
                expenses.len(),
                total.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
        } => {
            let update = TransactionUpdate {
                amount: amount.as_deref().map(parse_amount).transpose()?,
                description,
                category,
            };
            edit(&mut ledger, storage, &id, TransactionKind::Expense, update, symbol)?;
        }

        ExpenseCommands::Delete { id } => {
            delete(&mut ledger, storage, &id, TransactionKind::Expense, symbol)?;
        }
    }

    Ok(())
}

fn edit(
    ledger: &mut Ledger,
    storage: &Storage,
    identifier: &str,
    kind: TransactionKind,
    update: TransactionUpdate,
    symbol: &str,
) -> TallyResult<()> {
    if update.amount.is_none() && update.description.is_none() && update.category.is_none() {
        return Err(TallyError::Validation(
            "Nothing to change: pass --amount, --description or --category".into(),
        ));
    }

    let id = find_of_kind(ledger, identifier, kind)?;
    let txn = ledger.update(id, update)?;
    storage.ledger.save(ledger)?;

    println!("Updated {}", txn.id);
    print!("{}", format_transaction_details(&txn, symbol));
    print_totals(ledger, symbol);
    Ok(())
}

fn delete(
    ledger: &mut Ledger,
    storage: &Storage,
    identifier: &str,
    kind: TransactionKind,
    symbol: &str,
) -> TallyResult<()> {
    let id = find_of_kind(ledger, identifier, kind)?;
    let txn = ledger.delete(id)?;
    storage.ledger.save(ledger)?;

    println!("Deleted {} ({})", txn.id, txn.description);
    print_totals(ledger, symbol);
    Ok(())
}

/// Resolve an identifier, insisting the record is of the expected kind
fn find_of_kind(
    ledger: &Ledger,
    identifier: &str,
    kind: TransactionKind,
) -> TallyResult<crate::models::TransactionId> {
    let txn = ledger.find(identifier)?;
    if txn.kind != kind {
        return Err(TallyError::Validation(format!(
            "{} is an {}, not an {}",
            txn.id,
            txn.kind.to_string().to_lowercase(),
            kind.to_string().to_lowercase()
        )));
    }
    Ok(txn.id)
}

fn newest<'a>(
    records: &[&'a crate::models::Transaction],
    limit: usize,
) -> Vec<&'a crate::models::Transaction> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

fn print_totals(ledger: &Ledger, symbol: &str) {
    let totals = ledger.totals();
    println!(
        "Income: {}  Expenses: {}  Balance: {}",
        totals.income.format_with_symbol(symbol),
        totals.expenses.format_with_symbol(symbol),
        totals.balance().format_with_symbol(symbol)
    );
}

fn parse_amount(input: &str) -> TallyResult<Money> {
    Money::parse(input).map_err(|e| TallyError::Validation(format!("Invalid amount: {}", e)))
}

/// Timestamp for a new record: the given date at the current time of day
fn resolve_timestamp(date: Option<&str>, clock: &dyn Clock) -> TallyResult<NaiveDateTime> {
    let now = clock.now();
    match date {
        None => Ok(now),
        Some(s) => {
            let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
                TallyError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
            })?;
            Ok(date.and_time(now.time()))
        }
    }
}
