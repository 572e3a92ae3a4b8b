//! Budget service
//!
//! Provides business logic for category budgets: setting limits, listing
//! categories, and the advisory over-budget check.

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, BudgetWarning, Money};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Set the budget for a category, creating the category if needed
    ///
    /// The whole budget file is rewritten. Setting the same value twice keeps
    /// a single row for the category.
    pub fn set_budget(&self, category: &str, amount: Money) -> TrackerResult<Budget> {
        let budget = Budget::new(category.trim(), amount);
        budget
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let previous = self.storage.budgets.upsert(budget.clone())?;
        self.storage.budgets.save()?;

        match &previous {
            Some(before) => {
                tracing::info!(
                    category = %budget.category,
                    from = %before.amount,
                    to = %budget.amount,
                    "budget updated"
                );
                self.storage
                    .log_update(EntityType::Budget, budget.category.clone(), before, &budget);
            }
            None => {
                tracing::info!(category = %budget.category, amount = %budget.amount, "budget created");
                self.storage
                    .log_create(EntityType::Budget, budget.category.clone(), &budget);
            }
        }

        Ok(budget)
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> TrackerResult<Option<Budget>> {
        self.storage.budgets.get(category.trim())
    }

    /// Get the budget for a category, failing if it doesn't exist
    pub fn require(&self, category: &str) -> TrackerResult<Budget> {
        self.get(category)?
            .ok_or_else(|| TrackerError::category_not_found(category.trim()))
    }

    /// List all budgets in file order
    pub fn list(&self) -> TrackerResult<Vec<Budget>> {
        self.storage.budgets.get_all()
    }

    /// List category names in file order
    pub fn categories(&self) -> TrackerResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|b| b.category).collect())
    }

    /// Compare a proposed expense amount with the category's budget
    ///
    /// Returns a warning when the amount is strictly greater than the budget.
    /// Categories without a budget never warn.
    pub fn check_budget(&self, category: &str, amount: Money) -> TrackerResult<Option<BudgetWarning>> {
        Ok(self.get(category)?.and_then(|budget| {
            budget.is_exceeded_by(amount).then(|| BudgetWarning {
                category: budget.category.clone(),
                budget: budget.amount,
                amount,
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{paths::TrackerPaths, settings::Settings};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let storage = Storage::new(paths, &settings).unwrap();
        storage.load_all(&settings).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_defaults_seeded() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        assert_eq!(
            service.categories().unwrap(),
            vec!["Groceries", "Medical", "Entertainment", "Other"]
        );
        assert_eq!(
            service.require("Groceries").unwrap().amount,
            Money::from_cents(100_000)
        );
    }

    #[test]
    fn test_set_budget_twice_is_idempotent() {
        let (temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget("Travel", Money::from_cents(20000)).unwrap();
        service.set_budget("Travel", Money::from_cents(20000)).unwrap();

        let content = std::fs::read_to_string(temp_dir.path().join("budgets.csv")).unwrap();
        let rows = content.lines().filter(|l| l.starts_with("Travel,")).count();
        assert_eq!(rows, 1);
        assert!(content.contains("Travel,200.00"));
    }

    #[test]
    fn test_set_budget_trims_and_validates() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        let budget = service.set_budget("  Rent ", Money::from_cents(100)).unwrap();
        assert_eq!(budget.category, "Rent");

        assert!(service.set_budget("   ", Money::zero()).unwrap_err().is_validation());
        assert!(service
            .set_budget("Rent", Money::from_cents(-1))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_set_budget_is_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);

        service.set_budget("Medical", Money::from_cents(500)).unwrap();
        service.set_budget("Travel", Money::from_cents(500)).unwrap();

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[1].operation, Operation::Create);
    }

    #[test]
    fn test_check_budget() {
        let (_temp_dir, storage) = create_test_storage();
        let service = BudgetService::new(&storage);
        service.set_budget("Groceries", Money::from_cents(10000)).unwrap();

        let warning = service
            .check_budget("Groceries", Money::from_cents(15000))
            .unwrap()
            .unwrap();
        assert_eq!(warning.budget, Money::from_cents(10000));
        assert!(service
            .check_budget("Groceries", Money::from_cents(10000))
            .unwrap()
            .is_none());
        assert!(service
            .check_budget("Unknown", Money::from_cents(1))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_require_missing() {
        let (_temp_dir, storage) = create_test_storage();
        let err = BudgetService::new(&storage).require("Nope").unwrap_err();
        assert!(err.is_not_found());
    }
}
