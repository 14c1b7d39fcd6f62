//! To-do list display

use crate::models::Task;

/// Format the open and completed lists
pub fn format_task_lists(open: &[Task], completed: &[Task]) -> String {
    let mut output = String::new();

    output.push_str("To Do:\n");
    if open.is_empty() {
        output.push_str("  (nothing to do)\n");
    }
    for task in open {
        output.push_str(&format!("  {}\n", task.display_text()));
    }

    if !completed.is_empty() {
        output.push_str("\nCompleted:\n");
        for task in completed {
            output.push_str(&format!("  {}\n", task.completed_display_text()));
        }
    }

    output
}
