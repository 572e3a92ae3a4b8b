//! Audit logging of ledger changes
//!
//! Every expense recorded, budget set, and login enrolled is appended to an
//! append-only audit log as one JSON object per line.
//!
//! - `AuditEntry`: a single change with timestamp, operation, entity, and the
//!   before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
