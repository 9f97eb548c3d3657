//! Custom error types for the library catalog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// The copy already has an active loan
    #[error("Copy {copy_number} of '{call_number}' is already checked out")]
    AlreadyOnLoan {
        call_number: String,
        copy_number: u32,
    },

    /// The copy has no active loan
    #[error("Copy {copy_number} of '{call_number}' is not checked out")]
    NotOnLoan {
        call_number: String,
        copy_number: u32,
    },

    /// The loan has used its single renewal
    #[error("Loan on copy {copy_number} of '{call_number}' has already been renewed")]
    AlreadyRenewed {
        call_number: String,
        copy_number: u32,
    },

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CatalogError {
    /// Create a "not found" error for books
    pub fn book_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Book",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for copies
    pub fn copy_not_found(call_number: &str, copy_number: u32) -> Self {
        Self::NotFound {
            entity_type: "Copy",
            identifier: format!("{} #{}", call_number, copy_number),
        }
    }

    /// Create a "not found" error for borrowers
    pub fn borrower_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Borrower",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = CatalogError::book_not_found("QA76.73");
        assert_eq!(err.to_string(), "Book not found: QA76.73");
        assert!(err.is_not_found());
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_copy_not_found_error() {
        let err = CatalogError::copy_not_found("QA76.73", 3);
        assert_eq!(err.to_string(), "Copy not found: QA76.73 #3");
    }

    #[test]
    fn test_loan_state_errors() {
        let err = CatalogError::AlreadyRenewed {
            call_number: "QA76.73".into(),
            copy_number: 2,
        };
        assert_eq!(
            err.to_string(),
            "Loan on copy 2 of 'QA76.73' has already been renewed"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let catalog_err: CatalogError = io_err.into();
        assert!(matches!(catalog_err, CatalogError::Io(_)));
    }
}
