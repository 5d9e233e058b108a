//! Audit logging for maestro-cli
//!
//! Records every mutating command to an append-only JSONL log.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
