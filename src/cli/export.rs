//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::error::{TallyError, TallyResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (ledger records only)
    Csv,
    /// JSON format (ledger and to-do list)
    Json,
    /// YAML format (ledger and to-do list, human-readable)
    Yaml,
}

/// Export to a file, or to stdout when no output path is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> TallyResult<()> {
    let ledger = storage.ledger.load()?;
    let todo = storage.tasks.load()?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TallyError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_transactions_csv(ledger.all(), &mut writer)?,
        ExportFormat::Json => export_full_json(&ledger, &todo, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(&ledger, &todo, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!(
            "Exported {} record(s) and {} task(s) to: {}",
            ledger.len(),
            todo.open().len() + todo.completed().len(),
            path.display()
        );
    }

    Ok(())
}
