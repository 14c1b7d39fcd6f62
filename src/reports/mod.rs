//! Reports module for tallydesk
//!
//! Read-only views over ledger records: the income vs expense chart and the
//! spending breakdown by category.

pub mod breakdown;
pub mod chart;

pub use breakdown::{category_breakdown, CategorySpending};
pub use chart::{get_chart_data, window_label, window_range, ChartBucket, ChartData};
