//! Core data models for tallydesk
//!
//! Ledger records (incomes and expenses), expense categories, chart periods
//! and to-do tasks.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod task;
pub mod transaction;

pub use category::ExpenseCategory;
pub use ids::TransactionId;
pub use money::Money;
pub use period::{months_before, PeriodType};
pub use task::Task;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
