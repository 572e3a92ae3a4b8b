//! Credential repository
//!
//! Holds the single login credential persisted in credentials.txt.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::Credential;

use super::file_io::{read_text, write_text_atomic};

/// Repository for the stored login
pub struct CredentialRepository {
    path: PathBuf,
    data: RwLock<Option<Credential>>,
}

impl CredentialRepository {
    /// Create a new credential repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the credential from disk
    ///
    /// A missing file, an empty file, or a first line without a comma all
    /// leave the store empty.
    pub fn load(&self) -> Result<(), TrackerError> {
        let credential = read_text(&self.path)?
            .and_then(|contents| contents.lines().next().and_then(Credential::from_line));

        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = credential;

        Ok(())
    }

    /// Write the credential line to disk; no-op when nothing is stored
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        match data.as_ref() {
            Some(credential) => write_text_atomic(&self.path, &credential.to_line()),
            None => Ok(()),
        }
    }

    /// Get the stored credential
    pub fn get(&self) -> Result<Option<Credential>, TrackerError> {
        let data = self
            .data
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Replace the stored credential in memory
    pub fn set(&self, credential: Credential) -> Result<(), TrackerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = Some(credential);
        Ok(())
    }

    /// Whether a credential is stored
    pub fn is_enrolled(&self) -> Result<bool, TrackerError> {
        Ok(self.get()?.is_some())
    }
}
