//! Expense model
//!
//! An expense is a single discretionary spend recorded against a budget
//! category. Expenses are append-only: once recorded they are never edited.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use super::month::MonthKey;

/// Payment method stored when none was chosen
pub const UNKNOWN_PAYMENT_METHOD: &str = "Unknown";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Day the money was spent
    pub date: NaiveDate,

    /// Budget category name
    pub category: String,

    /// Amount spent
    pub amount: Money,

    /// Whether this is a recurring expense
    pub is_repeated: bool,

    /// How it was paid (cash, card, ...)
    pub payment_method: String,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Money,
        is_repeated: bool,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            is_repeated,
            payment_method: payment_method.into(),
        }
    }

    /// The month this expense is grouped under
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }

    /// Validate user-supplied fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount,
            self.payment_method
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyCategory,
    NegativeAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Please select a category"),
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
