//! Core data models for the expense tracker
//!
//! This module contains the data structures of the ledger: expenses, budgets,
//! money amounts, month keys, and the login credential.

pub mod budget;
pub mod credential;
pub mod expense;
pub mod money;
pub mod month;

pub use budget::{Budget, BudgetWarning};
pub use credential::Credential;
pub use expense::{Expense, UNKNOWN_PAYMENT_METHOD};
pub use money::Money;
pub use month::MonthKey;
