//! Monthly Summary Report
//!
//! Totals every expense by month, oldest first, and renders the totals as a
//! horizontal bar chart.

use std::io::Write;

use crate::display::report::{format_bar, separator};
use crate::error::TrackerResult;
use crate::models::Money;
use crate::services::{ExpenseService, MonthlyTotal};
use crate::storage::Storage;

/// Width of the bar column in characters
const BAR_WIDTH: usize = 40;

/// Monthly Summary Report
#[derive(Debug, Clone)]
pub struct MonthlySummaryReport {
    /// One entry per month with expenses, oldest first
    pub months: Vec<MonthlyTotal>,
    /// Sum across all months
    pub grand_total: Money,
    /// Number of expenses across all months
    pub expense_count: usize,
}

impl MonthlySummaryReport {
    /// Generate the report from every recorded expense
    pub fn generate(storage: &Storage) -> TrackerResult<Self> {
        let months = ExpenseService::new(storage).aggregate_by_month()?;
        let grand_total = months.iter().map(|m| m.total).sum();
        let expense_count = months.iter().map(|m| m.count).sum();

        Ok(Self {
            months,
            grand_total,
            expense_count,
        })
    }

    /// Largest single-month total
    pub fn max_total(&self) -> Money {
        self.months
            .iter()
            .map(|m| m.total)
            .max()
            .unwrap_or_default()
    }

    /// Format the report as a bar chart for the terminal
    pub fn format_terminal(&self, symbol: &str) -> String {
        if self.months.is_empty() {
            return "No expenses recorded.\n".to_string();
        }

        let max = self.max_total().as_f64();
        let width = 8 + 1 + 12 + 2 + BAR_WIDTH;

        let mut output = String::new();
        output.push_str("Monthly Expenses\n");
        output.push_str(&separator(width));
        output.push('\n');

        for month in &self.months {
            output.push_str(&format!(
                "{:<8} {:>12}  {}\n",
                month.month.to_string(),
                month.total.format_with_symbol(symbol),
                format_bar(month.total.as_f64(), max, BAR_WIDTH).trim_end()
            ));
        }

        output.push_str(&separator(width));
        output.push('\n');
        output.push_str(&format!(
            "{:<8} {:>12}  ({} expenses over {} months)\n",
            "Total",
            self.grand_total.format_with_symbol(symbol),
            self.expense_count,
            self.months.len()
        ));

        output
    }

    /// Export the monthly totals as CSV
    pub fn export_csv<W: Write>(&self, writer: W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Month", "Total", "Expenses"])?;

        for month in &self.months {
            csv_writer.write_record([
                month.month.to_string(),
                month.total.to_decimal_string(),
                month.count.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
