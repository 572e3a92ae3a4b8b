//! Storage layer for the expense tracker
//!
//! Provides CSV and text file storage with atomic writes and an optional
//! audit trail of every change.

pub mod budgets;
pub mod credentials;
pub mod expenses;
pub mod file_io;
pub mod init;

pub use budgets::{BudgetFileState, BudgetRepository};
pub use credentials::CredentialRepository;
pub use expenses::ExpenseRepository;
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{paths::TrackerPaths, settings::Settings};
use crate::error::TrackerError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    pub expenses: ExpenseRepository,
    pub budgets: BudgetRepository,
    pub credentials: CredentialRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths, settings: &Settings) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            credentials: CredentialRepository::new(paths.credentials_file()),
            audit,
        })
    }

    /// Get the audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Load all data from disk, seeding default budgets on first run
    pub fn load_all(&self, settings: &Settings) -> Result<(), TrackerError> {
        self.credentials.load()?;
        self.expenses.load()?;
        let state = self.budgets.load()?;
        init::seed_default_budgets(&self.budgets, state, settings)?;
        Ok(())
    }

    /// Record a create in the audit log
    ///
    /// Called after the change is saved, so a failed audit write is logged
    /// and otherwise ignored.
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_name: impl Into<String>,
        entity: &T,
    ) {
        if let Some(logger) = &self.audit {
            let entry = AuditEntry::create(entity_type, entity_name, entity);
            self.record(logger, &entry);
        }
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_name: impl Into<String>,
        before: &T,
        after: &T,
    ) {
        if let Some(logger) = &self.audit {
            let entry = AuditEntry::update(entity_type, entity_name, before, after);
            self.record(logger, &entry);
        }
    }

    fn record(&self, logger: &AuditLogger, entry: &AuditEntry) {
        if let Err(e) = logger.log(entry) {
            tracing::warn!(
                error = %e,
                entity = %entry.entity_name,
                "failed to write audit entry; the change itself was saved"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation_and_first_load() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("data");
        let paths = TrackerPaths::with_base_dir(base.clone());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        assert!(base.exists());

        storage.load_all(&Settings::default()).unwrap();
        assert_eq!(storage.budgets.count().unwrap(), 4);
        assert_eq!(storage.expenses.count().unwrap(), 0);
        assert!(!storage.credentials.is_enrolled().unwrap());
        assert!(base.join("budgets.csv").exists());
    }

    #[test]
    fn test_audit_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings {
            audit_enabled: false,
            ..Settings::default()
        };
        let storage = Storage::new(paths, &settings).unwrap();

        assert!(storage.audit().is_none());
        storage.log_create(EntityType::Budget, "Other", &serde_json::json!({}));
        assert!(!temp_dir.path().join("audit.log").exists());
    }

    #[test]
    fn test_audit_write_failure_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("audit.log")).unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths, &Settings::default()).unwrap();

        storage.log_create(EntityType::Budget, "Other", &serde_json::json!({}));
        assert!(temp_dir.path().join("audit.log").is_dir());
    }
}
