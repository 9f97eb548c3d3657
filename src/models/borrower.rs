//! Borrower model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered library user, keyed by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub first_name: String,
    pub last_name: String,
    /// Email address (unique key)
    pub email: String,
    pub phone: String,
}

impl Borrower {
    /// Create a new borrower
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Full name for display
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validate the borrower
    pub fn validate(&self) -> Result<(), BorrowerValidationError> {
        if self.email.trim().is_empty() {
            return Err(BorrowerValidationError::EmptyEmail);
        }

        if self.first_name.trim().is_empty() && self.last_name.trim().is_empty() {
            return Err(BorrowerValidationError::EmptyName);
        }

        Ok(())
    }
}

impl fmt::Display for Borrower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.full_name(), self.email)
    }
}

/// Validation errors for borrowers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowerValidationError {
    EmptyEmail,
    EmptyName,
}

impl fmt::Display for BorrowerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "Borrower email cannot be empty"),
            Self::EmptyName => write!(f, "Borrower needs a first or last name"),
        }
    }
}

impl std::error::Error for BorrowerValidationError {}
