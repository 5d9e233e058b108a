//! Custom error types for maestro-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::date::DateParseError;
use crate::models::Entry;

/// The main error type for maestro-cli operations
///
/// Every scheduling failure (clash, budget, bad index, bad date) is a variant
/// here so callers handle each outcome at the type level instead of catching
/// exceptions.
#[derive(Error, Debug)]
pub enum MaestroError {
    /// Malformed date text
    #[error("{0}")]
    DateParse(#[from] DateParseError),

    /// End instant precedes start instant
    #[error("An entry cannot end before it starts")]
    EndBeforeStart,

    /// The new entry overlaps an existing one; carries the conflicting entry
    #[error("Schedule clash with existing entry: {conflicting}")]
    Clash { conflicting: Box<Entry> },

    /// Adding a concert would push the month's total over the cap
    #[error("Cost of {entry} exceeds the monthly budget of {cap}")]
    BudgetExceeded { entry: Box<Entry>, cap: i64 },

    /// Non-positive recurrence period
    #[error("The recurrence period must be a positive number of days (got {0})")]
    PeriodRange(i64),

    /// Out-of-range entry/goal/contact/checklist index
    #[error("No {target} at index {index}")]
    Index { target: &'static str, index: usize },

    /// Non-integer where an index, cost, or period was expected
    #[error("Expected an integer, got '{0}'")]
    NumberFormat(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors (unreadable or malformed persisted data)
    #[error("Storage error: {0}")]
    Storage(String),
}

impl MaestroError {
    /// Create an "out of range" error for entry indices
    pub fn entry_index(index: usize) -> Self {
        Self::Index {
            target: "entry",
            index,
        }
    }

    /// Create an "out of range" error for goal indices
    pub fn goal_index(index: usize) -> Self {
        Self::Index {
            target: "goal",
            index,
        }
    }

    /// Create an "out of range" error for contact indices
    pub fn contact_index(index: usize) -> Self {
        Self::Index {
            target: "contact",
            index,
        }
    }

    /// Create an "out of range" error for checklist item indices
    pub fn checklist_index(index: usize) -> Self {
        Self::Index {
            target: "checklist item",
            index,
        }
    }

    /// Check if this is a clash error
    pub fn is_clash(&self) -> bool {
        matches!(self, Self::Clash { .. })
    }

    /// Check if this is a budget error
    pub fn is_budget_exceeded(&self) -> bool {
        matches!(self, Self::BudgetExceeded { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for MaestroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for MaestroError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for maestro-cli operations
pub type MaestroResult<T> = Result<T, MaestroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_display() {
        let err = MaestroError::entry_index(7);
        assert_eq!(err.to_string(), "No entry at index 7");
        assert!(matches!(err, MaestroError::Index { .. }));
    }

    #[test]
    fn test_period_range_display() {
        let err = MaestroError::PeriodRange(-3);
        assert_eq!(
            err.to_string(),
            "The recurrence period must be a positive number of days (got -3)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: MaestroError = io_err.into();
        assert!(matches!(err, MaestroError::Io(_)));
    }
}
