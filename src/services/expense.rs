//! Expense service
//!
//! Provides business logic for recording expenses and querying them by
//! month. Expenses are append-only.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetWarning, Expense, Money, MonthKey, UNKNOWN_PAYMENT_METHOD};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub date: NaiveDate,
    pub category: String,
    pub amount: Money,
    pub is_repeated: bool,
    pub payment_method: Option<String>,
}

/// An expense that was recorded, with the over-budget signal if any
#[derive(Debug, Clone)]
pub struct RecordedExpense {
    pub expense: Expense,
    pub budget_warning: Option<BudgetWarning>,
}

/// Sum of all expenses dated within one month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: MonthKey,
    pub total: Money,
    pub count: usize,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record an expense and rewrite expenses.csv
    ///
    /// The category must already have a budget. Going over that budget is
    /// reported in the result but never blocks the write.
    pub fn add_expense(&self, input: CreateExpenseInput) -> TrackerResult<RecordedExpense> {
        let payment_method = input
            .payment_method
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_PAYMENT_METHOD.to_string());

        let expense = Expense::new(
            input.date,
            input.category.trim(),
            input.amount,
            input.is_repeated,
            payment_method,
        );

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let budget_service = BudgetService::new(self.storage);
        budget_service.require(&expense.category)?;
        let budget_warning = budget_service.check_budget(&expense.category, expense.amount)?;

        if let Some(warning) = &budget_warning {
            tracing::warn!(
                category = %warning.category,
                budget = %warning.budget,
                amount = %warning.amount,
                "expense exceeds category budget"
            );
        }

        self.storage.expenses.append(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage
            .log_create(EntityType::Expense, expense.category.clone(), &expense);

        tracing::info!(
            date = %expense.date,
            category = %expense.category,
            amount = %expense.amount,
            "expense recorded"
        );

        Ok(RecordedExpense {
            expense,
            budget_warning,
        })
    }

    /// All expenses in the order they were recorded
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }

    /// Expenses dated within the given month, in recorded order
    pub fn expenses_for_month(&self, month: MonthKey) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_by_month(month)
    }

    /// Number of recorded expenses
    pub fn count(&self) -> TrackerResult<usize> {
        self.storage.expenses.count()
    }

    /// Group every expense by month and sum the amounts
    ///
    /// Months are returned oldest first. Months with no expenses are absent.
    pub fn aggregate_by_month(&self) -> TrackerResult<Vec<MonthlyTotal>> {
        let mut totals: BTreeMap<MonthKey, (Money, usize)> = BTreeMap::new();

        for expense in self.list()? {
            let entry = totals.entry(expense.month()).or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        Ok(totals
            .into_iter()
            .map(|(month, (total, count))| MonthlyTotal {
                month,
                total,
                count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn input(date: &str, category: &str, cents: i64) -> CreateExpenseInput {
        CreateExpenseInput {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category: category.to_string(),
            amount: Money::from_cents(cents),
            is_repeated: false,
            payment_method: Some("Cash".to_string()),
        }
    }

    #[test]
    fn test_add_expense_persists() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let recorded = service.add_expense(input("2024-01-05", "Groceries", 1000)).unwrap();
        assert!(recorded.budget_warning.is_none());
        assert_eq!(service.count().unwrap(), 1);

        let content = std::fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
        assert!(content.contains("2024-01-05,Groceries,10.00,False,Cash"));
    }

    #[test]
    fn test_add_expense_succeeds_when_audit_log_unwritable() {
        let (temp_dir, storage) = create_test_storage();
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let service = ExpenseService::new(&storage);

        assert!(service.add_expense(input("2024-01-05", "Groceries", 1000)).is_ok());
        assert_eq!(service.count().unwrap(), 1);

        let content = std::fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
        assert!(content.contains("2024-01-05,Groceries,10.00,False,Cash"));
    }

    #[test]
    fn test_over_budget_still_appends() {
        let (_temp_dir, storage) = create_test_storage();
        BudgetService::new(&storage)
            .set_budget("Groceries", Money::from_cents(10000))
            .unwrap();
        let service = ExpenseService::new(&storage);

        let recorded = service.add_expense(input("2024-01-05", "Groceries", 15000)).unwrap();

        let warning = recorded.budget_warning.unwrap();
        assert_eq!(warning.budget, Money::from_cents(10000));
        assert_eq!(warning.amount, Money::from_cents(15000));
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service.add_expense(input("2024-01-05", "Yachts", 100)).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(service.count().unwrap(), 0);
    }

    #[test]
    fn test_validation() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        assert!(service
            .add_expense(input("2024-01-05", " ", 100))
            .unwrap_err()
            .is_validation());
        assert!(service
            .add_expense(input("2024-01-05", "Groceries", -100))
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_blank_payment_method_is_unknown() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let mut blank = input("2024-01-05", "Other", 100);
        blank.payment_method = Some("  ".into());
        let mut missing = input("2024-01-06", "Other", 100);
        missing.payment_method = None;

        assert_eq!(service.add_expense(blank).unwrap().expense.payment_method, "Unknown");
        assert_eq!(service.add_expense(missing).unwrap().expense.payment_method, "Unknown");
    }

    #[test]
    fn test_expenses_for_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        service.add_expense(input("2024-01-05", "Groceries", 1000)).unwrap();
        service.add_expense(input("2024-02-01", "Medical", 700)).unwrap();
        service.add_expense(input("2024-01-20", "Other", 500)).unwrap();

        let january = service
            .expenses_for_month(MonthKey::new(2024, 1).unwrap())
            .unwrap();
        let categories: Vec<_> = january.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Groceries", "Other"]);

        assert!(service
            .expenses_for_month(MonthKey::new(2023, 1).unwrap())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_reload_reproduces_records() {
        let (temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);
        let mut repeated = input("2024-03-15", "Entertainment", 1999);
        repeated.is_repeated = true;
        repeated.payment_method = Some("Online Payment".into());
        service.add_expense(input("2024-03-01", "Groceries", 4250)).unwrap();
        service.add_expense(repeated).unwrap();
        let before = service.list().unwrap();

        let settings = Settings::default();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let reopened = Storage::new(paths, &settings).unwrap();
        reopened.load_all(&settings).unwrap();

        assert_eq!(ExpenseService::new(&reopened).list().unwrap(), before);
    }

    #[test]
    fn test_aggregate_by_month() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add_expense(input("2024-02-01", "Other", 700)).unwrap();
        service.add_expense(input("2024-01-05", "Groceries", 1000)).unwrap();
        service.add_expense(input("2024-01-20", "Medical", 500)).unwrap();

        let totals = service.aggregate_by_month().unwrap();
        let pairs: Vec<(String, f64)> = totals
            .iter()
            .map(|t| (t.month.to_string(), t.total.as_f64()))
            .collect();

        assert_eq!(
            pairs,
            vec![("2024-01".to_string(), 15.0), ("2024-02".to_string(), 7.0)]
        );
        assert_eq!(totals[0].count, 2);
    }

    #[test]
    fn test_aggregate_orders_across_years() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service.add_expense(input("2024-01-01", "Other", 100)).unwrap();
        service.add_expense(input("2023-12-31", "Other", 200)).unwrap();
        service.add_expense(input("2023-09-15", "Other", 300)).unwrap();

        let months: Vec<String> = service
            .aggregate_by_month()
            .unwrap()
            .iter()
            .map(|t| t.month.to_string())
            .collect();
        assert_eq!(months, vec!["2023-09", "2023-12", "2024-01"]);
    }

    #[test]
    fn test_aggregate_empty() {
        let (_temp_dir, storage) = create_test_storage();
        assert!(ExpenseService::new(&storage)
            .aggregate_by_month()
            .unwrap()
            .is_empty());
    }
}
