//! Audit logging for tallydesk
//!
//! Every create, update and delete on ledger records and to-do tasks is
//! appended to a line-delimited JSON log (`audit.log`) together with
//! before/after snapshots.
//!
//! ```rust,ignore
//! use tallydesk::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(EntityType::Transaction, id, Some(desc), &txn))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
