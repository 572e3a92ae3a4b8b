//! Login prompt for CLI commands
//!
//! Credentials come from the `--user`/`--password` flags (or their
//! environment variables); anything missing is prompted for on the terminal.

use std::io::{self, BufRead, Write};

use zeroize::Zeroizing;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::services::{AuthService, LoginOutcome};
use crate::storage::Storage;

/// Credentials supplied on the command line
#[derive(Default)]
pub struct Login {
    pub username: Option<String>,
    pub password: Option<Zeroizing<String>>,
}

/// Log in before running a command, prompting for missing fields
///
/// On first use the supplied pair becomes the stored login.
pub fn authenticate(storage: &Storage, settings: &Settings, login: Login) -> TrackerResult<LoginOutcome> {
    let username = match login.username {
        Some(username) => username,
        None => prompt_username()?,
    };
    let password = match login.password {
        Some(password) => password,
        None => prompt_password()?,
    };

    let outcome = AuthService::new(storage, settings).login(&username, &password)?;

    if outcome == LoginOutcome::Enrolled {
        eprintln!("Saved new login for '{}'.", username.trim());
    }

    Ok(outcome)
}

fn prompt_username() -> TrackerResult<String> {
    eprint!("Username: ");
    io::stderr()
        .flush()
        .map_err(|e| TrackerError::Io(format!("Failed to write prompt: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| TrackerError::Io(format!("Failed to read username: {}", e)))?;

    Ok(line.trim().to_string())
}

fn prompt_password() -> TrackerResult<Zeroizing<String>> {
    rpassword::prompt_password("Password: ")
        .map(Zeroizing::new)
        .map_err(|e| TrackerError::Credential(format!("Failed to read password: {}", e)))
}
