//! Core data models for the library catalog
//!
//! This module contains the data structures that represent the lending
//! domain: books, their physical copies, borrowers, and loans.

pub mod book;
pub mod borrower;
pub mod loan;

pub use book::{Book, BookCopy, BookValidationError};
pub use borrower::{Borrower, BorrowerValidationError};
pub use loan::Loan;
