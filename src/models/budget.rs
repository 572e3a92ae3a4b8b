//! Budget model
//!
//! A budget is a spending limit attached to a category name. The category
//! name is the unique key.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    /// Category name (unique)
    pub category: String,

    /// Limit for the category
    pub amount: Money,
}

impl Budget {
    /// Create a new budget
    pub fn new(category: impl Into<String>, amount: Money) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }

    /// Whether spending `amount` would go over this budget
    ///
    /// Only a strictly larger amount counts as exceeding.
    pub fn is_exceeded_by(&self, amount: Money) -> bool {
        amount > self.amount
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.amount.is_negative() {
            return Err(BudgetValidationError::NegativeBudget);
        }

        Ok(())
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.amount)
    }
}

/// Advisory signal raised when an expense goes over its category budget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    pub category: String,
    pub budget: Money,
    pub amount: Money,
}

impl BudgetWarning {
    /// How far the amount goes past the budget
    pub fn overage(&self) -> Money {
        self.amount - self.budget
    }
}

impl fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The amount exceeds the budget for {} ({})",
            self.category, self.budget
        )
    }
}

/// Validation errors for budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeBudget,
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::NegativeBudget => write!(f, "Budget amount cannot be negative"),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_exceeded_by() {
        let budget = Budget::new("Groceries", Money::from_cents(10000));
        assert!(budget.is_exceeded_by(Money::from_cents(15000)));
        assert!(!budget.is_exceeded_by(Money::from_cents(10000)));
        assert!(!budget.is_exceeded_by(Money::from_cents(9999)));
    }

    #[test]
    fn test_validate() {
        assert!(Budget::new("Medical", Money::zero()).validate().is_ok());
        assert_eq!(
            Budget::new("", Money::zero()).validate(),
            Err(BudgetValidationError::EmptyCategory)
        );
        assert_eq!(
            Budget::new("Medical", Money::from_cents(-100)).validate(),
            Err(BudgetValidationError::NegativeBudget)
        );
    }

    #[test]
    fn test_warning() {
        let warning = BudgetWarning {
            category: "Groceries".into(),
            budget: Money::from_cents(10000),
            amount: Money::from_cents(15000),
        };
        assert_eq!(warning.overage(), Money::from_cents(5000));
        assert_eq!(
            warning.to_string(),
            "The amount exceeds the budget for Groceries ($100.00)"
        );
    }
}
