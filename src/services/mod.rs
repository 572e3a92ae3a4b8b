//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, budget checks, login, and month aggregation.

pub mod auth;
pub mod budget;
pub mod expense;

pub use auth::{AuthService, LoginOutcome};
pub use budget::BudgetService;
pub use expense::{CreateExpenseInput, ExpenseService, MonthlyTotal, RecordedExpense};
