//! Storage layer for tallydesk
//!
//! JSON files with atomic writes and automatic directory creation.

pub mod file_io;
pub mod ledger;
pub mod tasks;

pub use file_io::{read_json, write_json_atomic};
pub use ledger::LedgerRepository;
pub use tasks::TaskRepository;

use crate::config::paths::TallyPaths;
use crate::error::TallyError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: TallyPaths,
    pub ledger: LedgerRepository,
    pub tasks: TaskRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TallyPaths) -> Result<Self, TallyError> {
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            tasks: TaskRepository::new(paths.tasks_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &TallyPaths {
        &self.paths
    }

    /// Check if anything has been saved yet
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
            || self.ledger.path().exists()
            || self.tasks.path().exists()
    }
}
