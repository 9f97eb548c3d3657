//! Display formatting for terminal output
//!
//! Provides table and detail views of catalog data. These are for people;
//! the stable text formats live in `catalog::report`.

pub mod book;
pub mod borrower;

pub use book::{format_book_details, format_book_list};
pub use borrower::{format_borrower_list, format_loan_list};
