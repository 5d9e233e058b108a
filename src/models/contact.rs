//! Contact annotation attached to a schedule entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact person relevant to one entry (organizer, teacher, examiner)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    /// Create a new contact
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {}", self.name, self.email, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let contact = Contact::new("Anna", "anna@example.com", "555-0101");
        assert_eq!(contact.to_string(), "Anna <anna@example.com> 555-0101");
    }
}
