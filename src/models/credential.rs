//! Login credential model
//!
//! The tracker holds exactly one username/password pair. It is persisted as a
//! single `username,password` line; the password half is either the plaintext
//! password or an Argon2id PHC string.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Prefix that marks a stored secret as an Argon2 PHC string
pub const HASH_PREFIX: &str = "$argon2";

/// The single stored login
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    username: String,
    /// Plaintext password or `$argon2...` hash
    secret: String,
}

impl Credential {
    /// Create a credential from a username and its stored secret
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Parse the persisted line
    ///
    /// The line is split on the first comma. Returns None for a line without a
    /// comma or with an empty half.
    pub fn from_line(line: &str) -> Option<Self> {
        let (username, secret) = line.trim_end_matches(['\r', '\n']).split_once(',')?;
        if username.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self::new(username, secret))
    }

    /// Render the persisted line
    pub fn to_line(&self) -> String {
        format!("{},{}", self.username, self.secret)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Whether the secret is an Argon2 hash rather than plaintext
    pub fn is_hashed(&self) -> bool {
        self.secret.starts_with(HASH_PREFIX)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
