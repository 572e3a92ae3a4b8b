//! Password hashing for the stored login credential
//!
//! Provides Argon2id hashing and verification of the single login password.

pub mod password;

pub use password::{hash_password, verify_password};
