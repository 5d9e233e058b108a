//! Goal annotation attached to a schedule entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A practice or performance goal attached to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// Free-text description of the goal
    pub text: String,

    /// Whether the goal has been achieved
    pub achieved: bool,
}

impl Goal {
    /// Create a new, not yet achieved goal
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            achieved: false,
        }
    }

    /// Mark the goal as achieved
    pub fn mark_achieved(&mut self) {
        self.achieved = true;
    }

    /// Human-readable achieved status
    pub fn status(&self) -> &'static str {
        if self.achieved {
            "Yes"
        } else {
            "No"
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Achieved: {}", self.text, self.status())
    }
}
