//! Display formatting for terminal output
//!
//! Tables, text bar charts and list views for the CLI.

pub mod chart;
pub mod report;
pub mod task;
pub mod transaction;

pub use chart::{format_chart, format_summary};
pub use task::format_task_lists;
pub use transaction::{format_transaction_details, format_transaction_list};
