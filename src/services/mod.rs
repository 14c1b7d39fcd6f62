//! Service layer for tallydesk
//!
//! Services hold the in-memory state of the ledger and the to-do list,
//! validate every change and record it in the audit log when one is
//! attached. Persistence is left to [`crate::storage`].

pub mod ledger;
pub mod sample;
pub mod todo;

pub use ledger::{Ledger, LedgerData, Totals, TransactionUpdate};
pub use sample::generate_sample_data;
pub use todo::{TodoData, TodoList};
