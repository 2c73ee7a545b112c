//! Audit trail of expense mutations
//!
//! Every create, update and delete the store performs can be appended to a
//! line-delimited JSON log together with the before/after record.
//!
//! - `AuditEntry`: one logged operation with timestamp, expense id and values.
//! - `AuditLogger`: appends entries to the log file and reads them back.
//! - `generate_diff`: a short human-readable summary of changed fields.
//!
//! The log is never replayed; the expense blob stays the only source of state.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
