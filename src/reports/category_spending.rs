//! Category Spending Report
//!
//! Shows how much was spent in each category during one month next to the
//! category's budget.

use std::io::Write;

use crate::display::report::{format_percentage, separator, truncate};
use crate::error::TrackerResult;
use crate::models::{Money, MonthKey};
use crate::services::{BudgetService, ExpenseService};
use crate::storage::Storage;

/// Spending for a single category in the report month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpendingRow {
    /// Category name
    pub category: String,
    /// Total spent in the month
    pub spent: Money,
    /// Number of expenses in the month
    pub count: usize,
    /// Budget for the category, if one is set
    pub budget: Option<Money>,
}

impl CategorySpendingRow {
    /// Budget left after this month's spending
    pub fn remaining(&self) -> Option<Money> {
        self.budget.map(|b| b - self.spent)
    }

    /// Whether spending is strictly above the budget
    pub fn is_over_budget(&self) -> bool {
        self.budget.is_some_and(|b| self.spent > b)
    }
}

/// Category Spending Report
#[derive(Debug, Clone)]
pub struct CategorySpendingReport {
    /// Month covered by the report
    pub month: MonthKey,
    /// Budgeted categories in file order, then any unbudgeted ones
    pub rows: Vec<CategorySpendingRow>,
    /// Total spent in the month
    pub total_spent: Money,
    /// Sum of all budgets
    pub total_budget: Money,
}

impl CategorySpendingReport {
    /// Generate the report for a month
    pub fn generate(storage: &Storage, month: MonthKey) -> TrackerResult<Self> {
        let budgets = BudgetService::new(storage).list()?;
        let expenses = ExpenseService::new(storage).expenses_for_month(month)?;

        let mut rows: Vec<CategorySpendingRow> = budgets
            .iter()
            .map(|b| CategorySpendingRow {
                category: b.category.clone(),
                spent: Money::zero(),
                count: 0,
                budget: Some(b.amount),
            })
            .collect();

        // Expenses loaded from disk may name a category that no longer has a budget
        for expense in &expenses {
            let index = match rows.iter().position(|r| r.category == expense.category) {
                Some(index) => index,
                None => {
                    rows.push(CategorySpendingRow {
                        category: expense.category.clone(),
                        spent: Money::zero(),
                        count: 0,
                        budget: None,
                    });
                    rows.len() - 1
                }
            };
            rows[index].spent += expense.amount;
            rows[index].count += 1;
        }

        Ok(Self {
            month,
            total_spent: expenses.iter().map(|e| e.amount).sum(),
            total_budget: budgets.iter().map(|b| b.amount).sum(),
            rows,
        })
    }

    /// Rows whose spending is over budget
    pub fn over_budget(&self) -> Vec<&CategorySpendingRow> {
        self.rows.iter().filter(|r| r.is_over_budget()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Spending for {}\n", self.month.friendly()));
        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12} {:>12} {:>12} {:>7}\n",
            "Category", "Spent", "Budget", "Remaining", "Share"
        ));
        output.push_str(&separator(72));
        output.push('\n');

        let money = |m: Option<Money>| match m {
            Some(m) => m.format_with_symbol(symbol),
            None => "-".to_string(),
        };

        for row in &self.rows {
            output.push_str(&format!(
                "{:<22} {:>12} {:>12} {:>12} {:>7}{}\n",
                truncate(&row.category, 22),
                row.spent.format_with_symbol(symbol),
                money(row.budget),
                money(row.remaining()),
                format_percentage(row.spent.as_f64(), self.total_spent.as_f64()),
                if row.is_over_budget() { "  OVER" } else { "" }
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<22} {:>12} {:>12}\n",
            "Total",
            self.total_spent.format_with_symbol(symbol),
            self.total_budget.format_with_symbol(symbol)
        ));

        let over: Vec<&str> = self
            .over_budget()
            .into_iter()
            .map(|r| r.category.as_str())
            .collect();
        if !over.is_empty() {
            output.push_str(&format!("\nOver budget: {}\n", over.join(", ")));
        }

        output
    }

    /// Export the report rows as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Month", "Category", "Spent", "Expenses", "Budget", "Remaining"])?;

        let decimal = |m: Option<Money>| m.map(|m| m.to_decimal_string()).unwrap_or_default();

        for row in &self.rows {
            csv_writer.write_record([
                self.month.to_string(),
                row.category.clone(),
                row.spent.to_decimal_string(),
                row.count.to_string(),
                decimal(row.budget),
                decimal(row.remaining()),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
