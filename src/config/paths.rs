//! Path management for the expense tracker
//!
//! All data files live side by side in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit directory passed by the caller (the `--data-dir` flag)
//! 2. `EXPENSE_TRACKER_DATA_DIR` environment variable (if set)
//! 3. The directory containing the running executable

use std::path::PathBuf;

use crate::error::TrackerError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Directory holding every persisted file
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the data directory from the environment or the executable location
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be determined.
    pub fn new() -> Result<Self, TrackerError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve paths, preferring an explicit directory when one is given
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, TrackerError> {
        match explicit {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to credentials.txt
    pub fn credentials_file(&self) -> PathBuf {
        self.base_dir.join("credentials.txt")
    }

    /// Get the path to expenses.csv
    pub fn expenses_file(&self) -> PathBuf {
        self.base_dir.join("expenses.csv")
    }

    /// Get the path to budgets.csv
    pub fn budgets_file(&self) -> PathBuf {
        self.base_dir.join("budgets.csv")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), TrackerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

/// The directory of the running executable
fn resolve_default_path() -> Result<PathBuf, TrackerError> {
    let exe = std::env::current_exe()
        .map_err(|e| TrackerError::Config(format!("Could not locate executable: {}", e)))?;

    exe.parent().map(PathBuf::from).ok_or_else(|| {
        TrackerError::Config(format!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(
            paths.expenses_file(),
            temp_dir.path().join("expenses.csv")
        );
        assert_eq!(paths.budgets_file(), temp_dir.path().join("budgets.csv"));
        assert_eq!(
            paths.credentials_file(),
            temp_dir.path().join("credentials.txt")
        );
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let paths = TrackerPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.exists());
    }
}
