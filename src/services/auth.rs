//! Login service
//!
//! The first successful login enrolls the credential; every later login must
//! match it. There is no password change, lockout, or rate limiting.

use serde_json::json;
use zeroize::Zeroizing;

use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::crypto::{hash_password, verify_password};
use crate::error::{TrackerError, TrackerResult};
use crate::models::credential::HASH_PREFIX;
use crate::models::Credential;
use crate::storage::Storage;

/// How a successful login came about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// No credential existed; this pair is now the stored login
    Enrolled,
    /// Matched the stored login
    Authenticated,
}

/// Service for the single-user login
pub struct AuthService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> AuthService<'a> {
    /// Create a new login service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Whether a login has been enrolled
    pub fn is_enrolled(&self) -> TrackerResult<bool> {
        self.storage.credentials.is_enrolled()
    }

    /// Log in, enrolling the pair if no credential is stored yet
    ///
    /// Surrounding whitespace is ignored on both fields. Fails with
    /// `AuthenticationFailed` when a credential exists and doesn't match.
    pub fn login(&self, username: &str, password: &str) -> TrackerResult<LoginOutcome> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::Validation(
                "Please provide both username and password".into(),
            ));
        }

        match self.storage.credentials.get()? {
            None => self.enroll(username, password),
            Some(stored) => {
                if self.matches(&stored, username, password)? {
                    tracing::debug!(username, "login accepted");
                    Ok(LoginOutcome::Authenticated)
                } else {
                    tracing::warn!(username, "login rejected");
                    Err(TrackerError::AuthenticationFailed)
                }
            }
        }
    }

    fn enroll(&self, username: &str, password: &str) -> TrackerResult<LoginOutcome> {
        if username.contains(',') {
            return Err(TrackerError::Validation(
                "Username cannot contain a comma".into(),
            ));
        }

        // A plaintext secret that looks like a hash would later be verified as one
        let hashed = self.settings.credential_hashing || password.starts_with(HASH_PREFIX);
        let secret = if hashed {
            Zeroizing::new(hash_password(password)?)
        } else {
            Zeroizing::new(password.to_string())
        };

        self.storage
            .credentials
            .set(Credential::new(username, secret.as_str()))?;
        self.storage.credentials.save()?;

        self.storage.log_create(
            EntityType::Credential,
            username,
            &json!({ "username": username, "hashed": hashed }),
        );

        tracing::info!(username, hashed, "login enrolled");
        Ok(LoginOutcome::Enrolled)
    }

    fn matches(&self, stored: &Credential, username: &str, password: &str) -> TrackerResult<bool> {
        if stored.username() != username {
            return Ok(false);
        }

        if !stored.is_hashed() {
            return Ok(stored.secret() == password);
        }

        match verify_password(password, stored.secret()) {
            Ok(matched) => Ok(matched),
            // Not a PHC string after all, so it was stored as plaintext
            Err(TrackerError::Credential(reason)) => {
                tracing::debug!(
                    %reason,
                    "stored secret is not a valid hash, comparing as plaintext"
                );
                Ok(stored.secret() == password)
            }
            Err(e) => Err(e),
        }
    }
}
