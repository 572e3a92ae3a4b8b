//! Reports module for the expense tracker
//!
//! Provides the monthly summary (with its text bar chart) and the
//! per-category spending report for a single month.

pub mod category_spending;
pub mod monthly;

pub use category_spending::{CategorySpendingReport, CategorySpendingRow};
pub use monthly::MonthlySummaryReport;
