//! Task repository for JSON storage
//!
//! Manages loading and saving the to-do list to tasks.json

use std::path::{Path, PathBuf};

use crate::error::TallyResult;
use crate::services::{TodoData, TodoList};

use super::file_io::{read_json, write_json_atomic};

/// Repository for to-do list persistence
pub struct TaskRepository {
    path: PathBuf,
}

impl TaskRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> TallyResult<TodoList> {
        let data: TodoData = read_json(&self.path)?;
        Ok(TodoList::from_data(data))
    }

    pub fn save(&self, list: &TodoList) -> TallyResult<()> {
        write_json_atomic(&self.path, list.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TaskRepository::new(temp_dir.path().join("tasks.json"));
        let now = NaiveDate::from_ymd_opt(2025, 4, 4)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap();

        let mut list = repo.load().unwrap();
        list.add("Renew passport", now).unwrap();
        let done = list.add("Buy stamps", now).unwrap();
        list.complete(done.id, now).unwrap();
        repo.save(&list).unwrap();

        let mut loaded = repo.load().unwrap();
        assert_eq!(loaded.data(), list.data());
        assert_eq!(loaded.add("Next", now).unwrap().id, 3);
    }
}
