//! Expense display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetWarning, Expense, Money};
use crate::services::RecordedExpense;

use super::report::truncate;

/// Longest category name shown before truncation
const CATEGORY_WIDTH: usize = 20;

#[derive(Tabled)]
struct ExpenseTableRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Repeated")]
    repeated: &'static str,
    #[tabled(rename = "Payment Method")]
    payment_method: String,
}

impl ExpenseTableRow {
    fn new(expense: &Expense, symbol: &str) -> Self {
        Self {
            date: expense.date.format("%Y-%m-%d").to_string(),
            category: truncate(&expense.category, CATEGORY_WIDTH),
            amount: expense.amount.format_with_symbol(symbol),
            repeated: if expense.is_repeated { "Yes" } else { "No" },
            payment_method: expense.payment_method.clone(),
        }
    }
}

/// Format expenses as a table with a total line
pub fn format_expense_table(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows: Vec<ExpenseTableRow> = expenses
        .iter()
        .map(|e| ExpenseTableRow::new(e, symbol))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()));

    let total: Money = expenses.iter().map(|e| e.amount).sum();

    format!(
        "{}\n\n{} expense(s), total {}\n",
        table,
        expenses.len(),
        total.format_with_symbol(symbol)
    )
}

/// Format the confirmation shown after an expense is recorded
pub fn format_recorded_expense(recorded: &RecordedExpense, symbol: &str) -> String {
    let expense = &recorded.expense;
    let mut output = format!(
        "Recorded {} for {} on {} ({})\n",
        expense.amount.format_with_symbol(symbol),
        expense.category,
        expense.date.format("%Y-%m-%d"),
        expense.payment_method
    );

    if let Some(warning) = &recorded.budget_warning {
        output.push_str(&format_budget_warning(warning, symbol));
    }

    output
}

fn format_budget_warning(warning: &BudgetWarning, symbol: &str) -> String {
    format!(
        "Warning: The amount exceeds the budget for {} ({} over a {} budget)\n",
        warning.category,
        warning.overage().format_with_symbol(symbol),
        warning.budget.format_with_symbol(symbol)
    )
}
