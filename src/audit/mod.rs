//! Audit logging for the library catalog
//!
//! Records every successful catalog mutation in an append-only log, with
//! before/after values where they exist.
//!
//! # Architecture
//!
//! - `AuditEntry`: one log line with timestamp, operation, entity information,
//!   and optional before/after values.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL) and
//!   reads them back.
//! - `generate_diff`: creates a human-readable summary of what changed.
//!
//! Loans map onto the generic operations: checkout creates a loan, renewal
//! updates it, and return deletes it.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
