//! Expense Tracker - single-user expense tracking with CSV storage
//!
//! This library provides the core functionality for the `expense` command
//! line tool. A single stored login guards a ledger of expenses recorded
//! against per-category budgets, with monthly summaries on top.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, budgets, money, months)
//! - `storage`: CSV and text file storage with atomic writes
//! - `services`: Business logic layer (login, budgets, expenses)
//! - `reports`: Monthly and per-category summaries
//! - `audit`: Audit logging of every change
//! - `crypto`: Optional Argon2 hashing of the stored password
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::TrackerPaths, settings::Settings};
//! use expense_tracker::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! storage.load_all(&settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
