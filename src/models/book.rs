//! Book and copy models
//!
//! A book is a catalog title keyed by call number. Each physical copy carries
//! a 1-based copy number and, while checked out, the active loan.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::loan::Loan;

/// A physical copy of a book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    /// Copy number, unique and dense from 1 within its book
    pub number: u32,

    /// Active loan, absent while the copy is on the shelf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan: Option<Loan>,
}

impl BookCopy {
    /// Create an available copy
    pub fn new(number: u32) -> Self {
        Self { number, loan: None }
    }

    /// Check if this copy has an active loan
    pub fn is_checked_out(&self) -> bool {
        self.loan.is_some()
    }
}

/// A catalog title with its copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Book title
    pub title: String,

    /// Book author
    pub author: String,

    /// Call number (unique key)
    pub call_number: String,

    /// Copies in copy-number order
    #[serde(default)]
    pub copies: Vec<BookCopy>,
}

impl Book {
    /// Create a new book with no copies
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        call_number: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            call_number: call_number.into(),
            copies: Vec::new(),
        }
    }

    /// Append a copy with the next sequential copy number and return that number
    pub fn add_copy(&mut self) -> u32 {
        let number = self.next_copy_number();
        self.copies.push(BookCopy::new(number));
        number
    }

    /// The number the next added copy will receive
    pub fn next_copy_number(&self) -> u32 {
        u32::try_from(self.copies.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    /// Number of copies owned
    pub fn copy_count(&self) -> usize {
        self.copies.len()
    }

    /// Number of copies currently on loan
    pub fn checked_out_count(&self) -> usize {
        self.copies.iter().filter(|c| c.is_checked_out()).count()
    }

    /// Look up a copy by its 1-based number
    pub fn copy(&self, number: u32) -> Option<&BookCopy> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.copies.get(index)
    }

    /// Look up a copy by its 1-based number for mutation
    pub fn copy_mut(&mut self, number: u32) -> Option<&mut BookCopy> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.copies.get_mut(index)
    }

    /// Check that copy numbers run 1..=n in order
    pub fn has_dense_copy_numbers(&self) -> bool {
        self.copies
            .iter()
            .zip(1u32..)
            .all(|(copy, expected)| copy.number == expected)
    }

    /// Validate the book's identifying fields
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.call_number.trim().is_empty() {
            return Err(BookValidationError::EmptyCallNumber);
        }

        if self.title.trim().is_empty() {
            return Err(BookValidationError::EmptyTitle);
        }

        if self.call_number.len() > 64 {
            return Err(BookValidationError::CallNumberTooLong(self.call_number.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {} [{}]", self.title, self.author, self.call_number)
    }
}

/// Validation errors for books
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    EmptyCallNumber,
    EmptyTitle,
    CallNumberTooLong(usize),
}

impl fmt::Display for BookValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCallNumber => write!(f, "Call number cannot be empty"),
            Self::EmptyTitle => write!(f, "Book title cannot be empty"),
            Self::CallNumberTooLong(len) => {
                write!(f, "Call number too long ({} chars, max 64)", len)
            }
        }
    }
}

impl std::error::Error for BookValidationError {}
