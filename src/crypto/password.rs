//! Password hashing using Argon2id
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`) so the salt and
//! cost parameters travel with the hash.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{TrackerError, TrackerResult};

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> TrackerResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| TrackerError::Credential(format!("Password hashing failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Check a password against a stored PHC hash string
///
/// Returns `Ok(false)` for a wrong password and an error only when the stored
/// hash itself is malformed.
pub fn verify_password(password: &str, stored_hash: &str) -> TrackerResult<bool> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| TrackerError::Credential(format!("Stored hash is invalid: {}", e)))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(TrackerError::Credential(format!(
            "Password verification failed: {}",
            e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_phc_string() {
        let hash = hash_password("b").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains(",b"));
    }

    #[test]
    fn test_verify() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_same_password_different_salt() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(verify_password("x", "not-a-phc-string").is_err());
    }
}
