//! History command
//!
//! Shows the most recent entries of the audit log.

use crate::display::format_audit_history;
use crate::error::TrackerResult;
use crate::storage::Storage;

/// Handle the history command
pub fn handle_history_command(storage: &Storage, count: usize) -> TrackerResult<()> {
    match storage.audit() {
        Some(logger) => {
            let entries = logger.read_recent(count)?;
            print!("{}", format_audit_history(&entries));
        }
        None => println!("Audit logging is disabled (set \"audit_enabled\" in settings.json)."),
    }
    Ok(())
}
