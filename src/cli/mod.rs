//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers load what
//! they need from storage, apply one change through a service, and save.

pub mod calc;
pub mod export;
pub mod greet;
pub mod ledger;
pub mod report;
pub mod sample;
pub mod todo;

pub use calc::handle_calc_command;
pub use export::{handle_export_command, ExportFormat};
pub use greet::{greeting, handle_greet_command};
pub use ledger::{handle_expense_command, handle_income_command, ExpenseCommands, IncomeCommands};
pub use report::{handle_chart_command, handle_summary_command};
pub use sample::handle_sample_command;
pub use todo::{handle_todo_command, TodoCommands};

use crate::audit::AuditLogger;
use crate::config::settings::Settings;
use crate::error::TallyResult;
use crate::services::{Ledger, TodoList};
use crate::storage::Storage;

/// Audit logger for this run, if auditing is enabled
fn audit_logger(storage: &Storage, settings: &Settings) -> Option<AuditLogger> {
    settings
        .audit_enabled
        .then(|| AuditLogger::new(storage.paths().audit_log()))
}

/// Load the ledger with the audit log attached
pub(crate) fn open_ledger(storage: &Storage, settings: &Settings) -> TallyResult<Ledger> {
    let ledger = storage.ledger.load()?;
    Ok(match audit_logger(storage, settings) {
        Some(logger) => ledger.with_audit(logger),
        None => ledger,
    })
}

/// Load the to-do list with the audit log attached
pub(crate) fn open_todo(storage: &Storage, settings: &Settings) -> TallyResult<TodoList> {
    let todo = storage.tasks.load()?;
    Ok(match audit_logger(storage, settings) {
        Some(logger) => todo.with_audit(logger),
        None => todo,
    })
}
