//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod budget;
pub mod expense;
pub mod history;
pub mod report;

pub use auth::{authenticate, Login};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_add_command, handle_list_command, AddArgs, ListArgs};
pub use history::handle_history_command;
pub use report::{handle_report_command, ReportCommands};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, MonthKey};

/// Parse a user-entered amount
pub(crate) fn parse_amount(raw: &str) -> TrackerResult<Money> {
    Money::parse(raw).map_err(|_| {
        TrackerError::Validation(format!("Please enter a valid amount (got '{}')", raw.trim()))
    })
}

/// Parse a user-entered `YYYY-MM` month
pub(crate) fn parse_month(raw: &str) -> TrackerResult<MonthKey> {
    raw.parse::<MonthKey>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}
