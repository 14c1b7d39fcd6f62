//! To-do list service
//!
//! Open tasks keep their insertion order; completed tasks are listed in the
//! order they were completed. Ids come from a counter that never goes
//! backwards, so a deleted id is not handed out again.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{TallyError, TallyResult};
use crate::models::Task;

/// Serializable to-do list contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoData {
    pub next_id: u32,
    #[serde(default)]
    pub open: Vec<Task>,
    #[serde(default)]
    pub completed: Vec<Task>,
}

impl Default for TodoData {
    fn default() -> Self {
        Self {
            next_id: 1,
            open: Vec::new(),
            completed: Vec::new(),
        }
    }
}

/// A to-do list with open and completed tasks
#[derive(Debug, Default)]
pub struct TodoList {
    data: TodoData,
    audit: Option<AuditLogger>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a list from stored data
    ///
    /// The id counter is bumped past any stored id so hand-edited files
    /// cannot cause duplicates.
    pub fn from_data(mut data: TodoData) -> Self {
        let highest = data
            .open
            .iter()
            .chain(data.completed.iter())
            .map(|t| t.id)
            .max()
            .unwrap_or(0);
        data.next_id = data.next_id.max(highest.saturating_add(1));

        Self { data, audit: None }
    }

    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn data(&self) -> &TodoData {
        &self.data
    }

    /// Add a task with the next id
    pub fn add(&mut self, text: &str, now: NaiveDateTime) -> TallyResult<Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TallyError::Validation(
                "Task text cannot be empty".to_string(),
            ));
        }

        let id = self.data.next_id;
        let next_id = id
            .checked_add(1)
            .filter(|_| !self.contains(id))
            .ok_or_else(|| TallyError::Validation("No task ids left".to_string()))?;

        let task = Task::new(id, text, now);
        self.data.next_id = next_id;
        self.data.open.push(task.clone());

        self.log(|| {
            AuditEntry::create(
                EntityType::Task,
                task.id.to_string(),
                Some(task.text.clone()),
                &task,
            )
        })?;

        Ok(task)
    }

    fn contains(&self, id: u32) -> bool {
        self.data
            .open
            .iter()
            .chain(self.data.completed.iter())
            .any(|t| t.id == id)
    }

    /// Move an open task to the completed list
    pub fn complete(&mut self, id: u32, now: NaiveDateTime) -> TallyResult<Task> {
        let index = self.open_index(id)?;
        let before = self.data.open.remove(index);

        let mut task = before.clone();
        task.complete(now);
        self.data.completed.push(task.clone());

        self.log(|| {
            AuditEntry::update(
                EntityType::Task,
                task.id.to_string(),
                Some(task.text.clone()),
                &before,
                &task,
            )
        })?;

        Ok(task)
    }

    /// Remove an open task
    pub fn delete(&mut self, id: u32) -> TallyResult<Task> {
        let index = self.open_index(id)?;
        let task = self.data.open.remove(index);

        self.log(|| {
            AuditEntry::delete(
                EntityType::Task,
                task.id.to_string(),
                Some(task.text.clone()),
                &task,
            )
        })?;

        Ok(task)
    }

    /// Drop every completed task, returning how many were removed
    pub fn clear_completed(&mut self) -> TallyResult<usize> {
        let cleared = std::mem::take(&mut self.data.completed);

        for task in &cleared {
            self.log(|| {
                AuditEntry::delete(
                    EntityType::Task,
                    task.id.to_string(),
                    Some(task.text.clone()),
                    task,
                )
            })?;
        }

        Ok(cleared.len())
    }

    pub fn open(&self) -> &[Task] {
        &self.data.open
    }

    pub fn completed(&self) -> &[Task] {
        &self.data.completed
    }

    fn open_index(&self, id: u32) -> TallyResult<usize> {
        self.data
            .open
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| {
                if self.data.completed.iter().any(|t| t.id == id) {
                    TallyError::Validation(format!("Task {} is already completed", id))
                } else {
                    TallyError::task_not_found(id.to_string())
                }
            })
    }

    fn log(&self, entry: impl FnOnce() -> AuditEntry) -> TallyResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut list = TodoList::new();
        let first = list.add("  Buy milk ", at(9)).unwrap();
        let second = list.add("Call plumber", at(9)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(first.text, "Buy milk");
        assert_eq!(second.id, 2);
        assert_eq!(list.open().len(), 2);
        assert_eq!(list.open()[0].display_text(), "1: Buy milk");
    }

    #[test]
    fn test_add_empty_text_is_rejected() {
        let mut list = TodoList::new();
        assert!(list.add("   ", at(9)).unwrap_err().is_validation());
        assert!(list.open().is_empty());
    }

    #[test]
    fn test_exhausted_ids_are_rejected() {
        let data = TodoData {
            next_id: 1,
            open: vec![Task::new(u32::MAX, "Last one", at(9))],
            completed: Vec::new(),
        };
        let mut list = TodoList::from_data(data);

        let err = list.add("One too many", at(10)).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(list.open().len(), 1);

        let data = TodoData {
            next_id: u32::MAX - 1,
            ..TodoData::default()
        };
        let mut list = TodoList::from_data(data);
        assert_eq!(list.add("Penultimate", at(9)).unwrap().id, u32::MAX - 1);
        assert!(list.add("Overflow", at(9)).unwrap_err().is_validation());
    }

    #[test]
    fn test_lifecycle() {
        let mut list = TodoList::new();
        let a = list.add("Pay rent", at(8)).unwrap();
        let b = list.add("Book dentist", at(8)).unwrap();
        let c = list.add("Return parcel", at(8)).unwrap();

        let done = list.complete(b.id, at(18)).unwrap();
        assert_eq!(done.completed_at, Some(at(18)));
        assert_eq!(
            list.completed()[0].completed_display_text(),
            "Book dentist (Completed: 06/02/2025 18:15)"
        );

        list.delete(a.id).unwrap();
        let open: Vec<u32> = list.open().iter().map(|t| t.id).collect();
        assert_eq!(open, vec![c.id]);

        assert_eq!(list.clear_completed().unwrap(), 1);
        assert!(list.completed().is_empty());

        // Ids keep counting after deletes
        assert_eq!(list.add("New task", at(19)).unwrap().id, 4);
    }

    #[test]
    fn test_complete_errors() {
        let mut list = TodoList::new();
        let task = list.add("Once", at(8)).unwrap();
        list.complete(task.id, at(9)).unwrap();

        assert!(list.complete(task.id, at(10)).unwrap_err().is_validation());
        assert!(list.complete(99, at(10)).unwrap_err().is_not_found());
        assert!(list.delete(99).unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_data_bumps_counter() {
        let data = TodoData {
            next_id: 1,
            open: vec![Task::new(7, "Stored", at(8))],
            completed: Vec::new(),
        };
        let mut list = TodoList::from_data(data);
        assert_eq!(list.add("Next", at(9)).unwrap().id, 8);
    }

    #[test]
    fn test_mutations_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut list = TodoList::new().with_audit(logger.clone());

        let task = list.add("Audit me", at(8)).unwrap();
        list.complete(task.id, at(9)).unwrap();
        list.clear_completed().unwrap();

        assert_eq!(logger.entry_count().unwrap(), 3);
    }
}
