//! Storage initialization
//!
//! Handles first-run setup: seeding default budget categories.

use crate::config::{paths::TrackerPaths, settings::Settings};
use crate::error::TrackerError;
use crate::models::{Budget, Money};

use super::budgets::{BudgetFileState, BudgetRepository};
use super::expenses::EXPENSE_HEADER;
use super::file_io::write_csv_atomic;

/// Budget given to seeded categories when budgets.csv did not exist
pub const MISSING_FILE_SEED: Money = Money::from_cents(100_000);

/// Seed default categories after a load, persisting them
///
/// A missing budgets.csv is seeded at 1000.00 per category and a header-only
/// file at 0.00. Returns whether anything was seeded.
pub fn seed_default_budgets(
    budgets: &BudgetRepository,
    state: BudgetFileState,
    settings: &Settings,
) -> Result<bool, TrackerError> {
    let amount = match state {
        BudgetFileState::Loaded => return Ok(false),
        BudgetFileState::Missing => MISSING_FILE_SEED,
        BudgetFileState::Empty => Money::zero(),
    };

    for category in &settings.default_categories {
        let category = category.trim();
        if !category.is_empty() {
            budgets.upsert(Budget::new(category, amount))?;
        }
    }
    budgets.save()?;

    tracing::info!(
        categories = settings.default_categories.len(),
        amount = %amount,
        "seeded default budgets"
    );

    Ok(true)
}

/// Initialize storage for a fresh installation
///
/// Creates the data directory, seeds budgets.csv, and writes a header-only
/// expenses.csv. Existing files are left alone.
pub fn initialize_storage(paths: &TrackerPaths, settings: &Settings) -> Result<(), TrackerError> {
    paths.ensure_directories()?;

    let budgets = BudgetRepository::new(paths.budgets_file());
    let state = budgets.load()?;
    seed_default_budgets(&budgets, state, settings)?;

    if !paths.expenses_file().exists() {
        write_csv_atomic::<(), _>(paths.expenses_file(), &EXPENSE_HEADER, &[])?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &TrackerPaths) -> bool {
    !paths.budgets_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, TrackerPaths) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, paths)
    }

    #[test]
    fn test_initialize_storage() {
        let (_temp_dir, paths) = setup();
        assert!(needs_initialization(&paths));

        initialize_storage(&paths, &Settings::default()).unwrap();

        assert!(!needs_initialization(&paths));
        assert_eq!(
            std::fs::read_to_string(paths.budgets_file()).unwrap(),
            "Category,Budget\nGroceries,1000.00\nMedical,1000.00\nEntertainment,1000.00\nOther,1000.00\n"
        );
        assert_eq!(
            std::fs::read_to_string(paths.expenses_file()).unwrap(),
            "Date,Category,Amount,Repeated,Payment Method\n"
        );
    }

    #[test]
    fn test_header_only_file_seeds_zero() {
        let (_temp_dir, paths) = setup();
        std::fs::write(paths.budgets_file(), "Category,Budget\n").unwrap();

        let budgets = BudgetRepository::new(paths.budgets_file());
        let state = budgets.load().unwrap();
        assert!(seed_default_budgets(&budgets, state, &Settings::default()).unwrap());

        let all = budgets.get_all().unwrap();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|b| b.amount.is_zero()));
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let (_temp_dir, paths) = setup();
        std::fs::write(paths.budgets_file(), "Category,Budget\nTravel,50\n").unwrap();

        initialize_storage(&paths, &Settings::default()).unwrap();

        let budgets = BudgetRepository::new(paths.budgets_file());
        budgets.load().unwrap();
        let all = budgets.get_all().unwrap();
        assert_eq!(all, vec![Budget::new("Travel", Money::from_cents(5000))]);
    }
}
