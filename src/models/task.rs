//! To-do task model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential id, unique within one list
    pub id: u32,
    pub text: String,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn new(id: u32, text: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            text: text.into(),
            created_at,
            completed_at: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Mark the task as completed at the given time
    pub fn complete(&mut self, at: NaiveDateTime) {
        self.completed_at = Some(at);
    }

    /// Text shown in the open task list
    pub fn display_text(&self) -> String {
        format!("{}: {}", self.id, self.text)
    }

    /// Text shown in the completed task list
    pub fn completed_display_text(&self) -> String {
        let stamp = self
            .completed_at
            .map(|at| at.format("%m/%d/%Y %H:%M").to_string())
            .unwrap_or_default();
        format!("{} (Completed: {})", self.text, stamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_display_texts() {
        let created = NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let mut task = Task::new(3, "Water plants", created);
        assert_eq!(task.display_text(), "3: Water plants");
        assert!(!task.is_completed());

        let done = NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(18, 45, 0)
            .unwrap();
        task.complete(done);
        assert!(task.is_completed());
        assert_eq!(
            task.completed_display_text(),
            "Water plants (Completed: 06/02/2025 18:45)"
        );
    }
}
