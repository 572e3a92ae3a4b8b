//! Display formatting for terminal output
//!
//! Turns expenses, budgets, and audit entries into tables and text the CLI
//! prints as-is.

pub mod audit;
pub mod budget;
pub mod expense;
pub mod report;

pub use audit::format_audit_history;
pub use budget::{format_budget_details, format_budget_table, format_category_list};
pub use expense::{format_expense_table, format_recorded_expense};
