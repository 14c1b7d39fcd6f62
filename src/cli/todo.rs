//! To-do list CLI commands

use clap::Subcommand;

use crate::clock::Clock;
use crate::config::settings::Settings;
use crate::display::format_task_lists;
use crate::error::TallyResult;
use crate::storage::Storage;

use super::open_todo;

/// To-do subcommands
#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show open and completed tasks
    List,

    /// Mark a task as completed
    #[command(alias = "done")]
    Complete {
        /// Task number
        id: u32,
    },

    /// Delete an open task
    #[command(alias = "rm")]
    Delete {
        /// Task number
        id: u32,
    },

    /// Remove all completed tasks
    ClearCompleted,
}

/// Handle a to-do command
pub fn handle_todo_command(
    storage: &Storage,
    settings: &Settings,
    clock: &dyn Clock,
    cmd: TodoCommands,
) -> TallyResult<()> {
    let mut todo = open_todo(storage, settings)?;

    match cmd {
        TodoCommands::Add { text } => {
            let task = todo.add(&text.join(" "), clock.now())?;
            storage.tasks.save(&todo)?;
            println!("Added {}", task.display_text());
        }

        TodoCommands::List => {
            print!("{}", format_task_lists(todo.open(), todo.completed()));
        }

        TodoCommands::Complete { id } => {
            let task = todo.complete(id, clock.now())?;
            storage.tasks.save(&todo)?;
            println!("{}", task.completed_display_text());
        }

        TodoCommands::Delete { id } => {
            let task = todo.delete(id)?;
            storage.tasks.save(&todo)?;
            println!("Deleted {}", task.display_text());
        }

        TodoCommands::ClearCompleted => {
            let cleared = todo.clear_completed()?;
            storage.tasks.save(&todo)?;
            println!("Cleared {} completed task(s)", cleared);
        }
    }

    Ok(())
}
