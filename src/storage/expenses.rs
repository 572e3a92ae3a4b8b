//! Expense repository for CSV storage
//!
//! Manages loading and saving expenses to expenses.csv. Expenses keep their
//! insertion order, which is also the file order.

use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Expense, Money, MonthKey};

use super::file_io::{read_csv_rows, write_csv_atomic};

/// Column names of expenses.csv, in order
pub const EXPENSE_HEADER: [&str; 5] = ["Date", "Category", "Amount", "Repeated", "Payment Method"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One row of expenses.csv as text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Amount", default)]
    amount: String,
    #[serde(rename = "Repeated", default)]
    repeated: String,
    #[serde(rename = "Payment Method", default)]
    payment_method: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense) -> Self {
        Self {
            date: expense.date.format(DATE_FORMAT).to_string(),
            category: expense.category.clone(),
            amount: expense.amount.to_decimal_string(),
            repeated: if expense.is_repeated { "True" } else { "False" }.to_string(),
            payment_method: expense.payment_method.clone(),
        }
    }

    /// Convert to an expense; None if the date is unusable
    ///
    /// A malformed amount becomes zero and anything but `True` is false.
    fn into_expense(self) -> Option<Expense> {
        let date = parse_stored_date(&self.date)?;

        Some(Expense::new(
            date,
            self.category,
            Money::parse_lenient(&self.amount),
            self.repeated == "True",
            self.payment_method,
        ))
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring any time portion after whitespace
fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(day, DATE_FORMAT).ok()
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<Vec<Expense>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load expenses from disk
    ///
    /// A missing file means no expenses. Rows with an unparseable date are
    /// skipped with a warning.
    pub fn load(&self) -> Result<(), TrackerError> {
        let rows: Vec<ExpenseRow> = read_csv_rows(&self.path)?.unwrap_or_default();

        let mut expenses = Vec::with_capacity(rows.len());
        for (index, row) in rows.into_iter().enumerate() {
            let raw_date = row.date.clone();
            match row.into_expense() {
                Some(expense) => expenses.push(expense),
                None => tracing::warn!(
                    row = index + 1,
                    date = %raw_date,
                    "skipping expense with invalid date"
                ),
            }
        }

        tracing::debug!(count = expenses.len(), path = %self.path.display(), "loaded expenses");

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = expenses;

        Ok(())
    }

    /// Rewrite expenses.csv from memory
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let rows: Vec<ExpenseRow> = data.iter().map(ExpenseRow::from_expense).collect();
        write_csv_atomic(&self.path, &EXPENSE_HEADER, &rows)
    }

    /// Append an expense in memory
    pub fn append(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(expense);
        Ok(())
    }

    /// Get all expenses in insertion order
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get the expenses dated within a month, in insertion order
    pub fn get_by_month(&self, month: MonthKey) -> Result<Vec<Expense>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|e| month.contains(e.date))
            .cloned()
            .collect())
    }

    /// Count expenses
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
