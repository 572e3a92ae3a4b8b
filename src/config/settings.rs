//! User settings for the expense tracker
//!
//! Manages display preferences, first-run category seeds, suggested payment
//! methods, and how the login credential is stored.

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// User settings persisted as settings.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Categories seeded into budgets.csv on first run
    #[serde(default = "default_categories")]
    pub default_categories: Vec<String>,

    /// Payment methods offered when recording an expense
    #[serde(default = "default_payment_methods")]
    pub payment_methods: Vec<String>,

    /// Store new credentials as Argon2id hashes instead of plaintext
    #[serde(default)]
    pub credential_hashing: bool,

    /// Append ledger mutations to audit.log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_categories() -> Vec<String> {
    ["Groceries", "Medical", "Entertainment", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_payment_methods() -> Vec<String> {
    ["Cash", "Credit Card", "Debit Card", "Online Payment"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_categories: default_categories(),
            payment_methods: default_payment_methods(),
            credential_hashing: false,
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        crate::storage::file_io::write_text_atomic(paths.settings_file(), &contents)
    }
}
