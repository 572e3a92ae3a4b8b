//! Budget repository for CSV storage
//!
//! Manages loading and saving category budgets to budgets.csv. Budgets keep
//! the order in which categories were first added.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Budget, Money};

use super::file_io::{read_csv_rows, write_csv_atomic};

/// Column names of budgets.csv, in order
pub const BUDGET_HEADER: [&str; 2] = ["Category", "Budget"];

/// What `load` found on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetFileState {
    /// budgets.csv does not exist
    Missing,
    /// budgets.csv exists but has no data rows
    Empty,
    /// At least one data row was read
    Loaded,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetRow {
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Budget", default)]
    budget: String,
}

/// Repository for budget persistence
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load budgets from disk
    ///
    /// Rows with a blank category are ignored and a malformed amount becomes
    /// zero. A repeated category keeps its first position and its last value.
    pub fn load(&self) -> Result<BudgetFileState, TrackerError> {
        let Some(rows) = read_csv_rows::<BudgetRow, _>(&self.path)? else {
            return Ok(BudgetFileState::Missing);
        };

        let state = if rows.is_empty() {
            BudgetFileState::Empty
        } else {
            BudgetFileState::Loaded
        };

        let mut budgets: Vec<Budget> = Vec::with_capacity(rows.len());
        for row in rows {
            let category = row.category.trim();
            if category.is_empty() {
                continue;
            }
            let amount = Money::parse_lenient(&row.budget);
            upsert_in(&mut budgets, Budget::new(category, amount));
        }

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = budgets;

        Ok(state)
    }

    /// Rewrite budgets.csv from memory
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let rows: Vec<BudgetRow> = data
            .iter()
            .map(|b| BudgetRow {
                category: b.category.clone(),
                budget: b.amount.to_decimal_string(),
            })
            .collect();

        write_csv_atomic(&self.path, &BUDGET_HEADER, &rows)
    }

    /// Get a budget by exact category name
    pub fn get(&self, category: &str) -> Result<Option<Budget>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|b| b.category == category).cloned())
    }

    /// Get all budgets in order
    pub fn get_all(&self) -> Result<Vec<Budget>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Insert or update a budget, returning the previous value if any
    pub fn upsert(&self, budget: Budget) -> Result<Option<Budget>, TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(upsert_in(&mut data, budget))
    }

    /// Count budgets
    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

fn upsert_in(budgets: &mut Vec<Budget>, budget: Budget) -> Option<Budget> {
    match budgets.iter_mut().find(|b| b.category == budget.category) {
        Some(existing) => Some(std::mem::replace(existing, budget)),
        None => {
            budgets.push(budget);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.csv");
        let repo = BudgetRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_load_states() {
        let (_temp_dir, repo) = create_test_repo();
        assert_eq!(repo.load().unwrap(), BudgetFileState::Missing);

        fs::write(&repo.path, "Category,Budget\n").unwrap();
        assert_eq!(repo.load().unwrap(), BudgetFileState::Empty);

        fs::write(&repo.path, "Category,Budget\nGroceries,250.0\n").unwrap();
        assert_eq!(repo.load().unwrap(), BudgetFileState::Loaded);
        assert_eq!(
            repo.get("Groceries").unwrap().unwrap().amount,
            Money::from_cents(25000)
        );
    }

    #[test]
    fn test_load_skips_blank_and_coerces_amount() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            &repo.path,
            "Category,Budget\n  ,10\nMedical,abc\n Other ,5\n",
        )
        .unwrap();

        repo.load().unwrap();
        let budgets = repo.get_all().unwrap();
        assert_eq!(budgets.len(), 2);
        assert_eq!(budgets[0], Budget::new("Medical", Money::zero()));
        assert_eq!(budgets[1], Budget::new("Other", Money::from_cents(500)));
    }

    #[test]
    fn test_oversized_budget_loads_as_zero() {
        let (_temp_dir, repo) = create_test_repo();
        fs::write(
            &repo.path,
            "Category,Budget\nGroceries,100000000000000000\nOther,10.999\n",
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.get("Groceries").unwrap().unwrap().amount, Money::zero());
        assert_eq!(
            repo.get("Other").unwrap().unwrap().amount,
            Money::from_cents(1100)
        );
    }

    #[test]
    fn test_upsert_keeps_single_row() {
        let (_temp_dir, repo) = create_test_repo();
        repo.upsert(Budget::new("Groceries", Money::from_cents(10000))).unwrap();
        let previous = repo
            .upsert(Budget::new("Groceries", Money::from_cents(10000)))
            .unwrap();
        assert!(previous.is_some());
        repo.save().unwrap();

        let content = fs::read_to_string(&repo.path).unwrap();
        assert_eq!(content, "Category,Budget\nGroceries,100.00\n");
    }

    #[test]
    fn test_upsert_preserves_order() {
        let (_temp_dir, repo) = create_test_repo();
        for name in ["Groceries", "Medical", "Entertainment"] {
            repo.upsert(Budget::new(name, Money::zero())).unwrap();
        }
        repo.upsert(Budget::new("Medical", Money::from_cents(100))).unwrap();

        let names: Vec<String> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|b| b.category)
            .collect();
        assert_eq!(names, vec!["Groceries", "Medical", "Entertainment"]);
    }
}
