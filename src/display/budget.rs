//! Budget display formatting

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::Budget;

#[derive(Tabled)]
struct BudgetTableRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Budget")]
    budget: String,
}

/// Format budgets as a table in file order
pub fn format_budget_table(budgets: &[Budget], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = budgets.iter().map(|b| BudgetTableRow {
        category: b.category.clone(),
        budget: b.amount.format_with_symbol(symbol),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format a single budget
pub fn format_budget_details(budget: &Budget, symbol: &str) -> String {
    format!(
        "Category: {}\nBudget:   {}\n",
        budget.category,
        budget.amount.format_with_symbol(symbol)
    )
}

/// Format category names one per line
pub fn format_category_list(categories: &[String]) -> String {
    let mut output = String::new();
    for category in categories {
        output.push_str(category);
        output.push('\n');
    }
    output
}
