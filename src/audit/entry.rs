//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An entry was added to the schedule
    Add,
    /// An entry was changed (done-marking, edit, reschedule, annotations)
    Update,
    /// An entry was deleted
    Delete,
    /// The budget cap or another setting was changed
    Configure,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Add => write!(f, "ADD"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
            Operation::Configure => write!(f, "CONFIGURE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation happened
    pub timestamp: DateTime<Utc>,

    /// What kind of mutation it was
    pub operation: Operation,

    /// Human-readable description of what changed
    pub detail: String,
}

impl AuditEntry {
    /// Create an audit entry stamped with the current time
    pub fn new(operation: Operation, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            detail: detail.into(),
        }
    }
}
