//! YAML export
//!
//! Same structure as the JSON export, for people who read their backups.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::export::json::FullExport;
use crate::services::{Ledger, TodoList};

/// Export everything as YAML with a short header comment
pub fn export_full_yaml<W: Write>(
    ledger: &Ledger,
    todo: &TodoList,
    writer: &mut W,
) -> TallyResult<()> {
    let export = FullExport::new(ledger, todo);

    writeln!(writer, "# tallydesk export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| TallyError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TallyError::Export(e.to_string()))?;

    Ok(())
}
