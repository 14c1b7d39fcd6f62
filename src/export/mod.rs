//! Export module for tallydesk
//!
//! - CSV: ledger records, one row each (spreadsheet-compatible)
//! - JSON: ledger and to-do list with schema versioning
//! - YAML: the JSON structure in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
