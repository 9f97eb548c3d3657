//! Text reports over the catalog
//!
//! The CSV reports and the copy/borrower info lines are stable text formats
//! read by other tools, so field order, quoting, and separators are fixed.
//! Dates are always ISO `YYYY-MM-DD`.

use std::fmt::Write as _;

use chrono::NaiveDate;

use super::Catalog;
use crate::models::{Book, Loan};

/// Wrap a string field in double quotes, doubling any embedded quotes
pub fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// An active loan together with the copy it belongs to
#[derive(Debug, Clone, Copy)]
pub struct LoanView<'a> {
    pub book: &'a Book,
    pub copy_number: u32,
    pub loan: &'a Loan,
}

/// Table sizes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub books: usize,
    pub copies: usize,
    pub borrowers: usize,
    pub loans: usize,
    pub renewed_loans: usize,
}

impl Catalog {
    /// One `"title","author","callNumber",copies` line per book, by call number
    pub fn book_csv(&self) -> String {
        let mut out = String::new();
        for book in self.books.values() {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                quote(&book.title),
                quote(&book.author),
                quote(&book.call_number),
                book.copy_count()
            );
        }
        out
    }

    /// One `"first","last","email","phone"` line per borrower, by email
    pub fn borrower_csv(&self) -> String {
        let mut out = String::new();
        for b in self.borrowers.values() {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                quote(&b.first_name),
                quote(&b.last_name),
                quote(&b.email),
                quote(&b.phone)
            );
        }
        out
    }

    /// Describe one copy and, if checked out, its loan
    ///
    /// `None` if the book or copy does not exist.
    pub fn copy_info(&self, call_number: &str, copy_number: u32) -> Option<String> {
        let book = self.books.get(call_number)?;
        let copy = book.copy(copy_number)?;

        let head = format!(
            "{}, {}, {}, {}",
            quote(&book.call_number),
            copy.number,
            quote(&book.title),
            quote(&book.author)
        );

        Some(match &copy.loan {
            None => format!("{}, Available", head),
            Some(loan) => format!(
                "{}, {}, {}, {}",
                head,
                quote(&loan.borrower_email),
                loan.due_date,
                loan.renewed
            ),
        })
    }

    /// Describe a borrower followed by one `* ` line per active loan
    ///
    /// `None` if no borrower has this email.
    pub fn borrower_info(&self, email: &str) -> Option<String> {
        let b = self.borrowers.get(email)?;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}, {}, {}, {}",
            quote(&b.first_name),
            quote(&b.last_name),
            quote(&b.email),
            quote(&b.phone)
        );

        for view in self.loans_for(email) {
            let _ = writeln!(
                out,
                "* {}, {}, {}, {}, {}, {}",
                quote(&view.book.call_number),
                view.copy_number,
                quote(&view.book.title),
                quote(&view.book.author),
                view.loan.due_date,
                view.loan.renewed
            );
        }

        Some(out)
    }

    /// Every active loan, by call number then copy number
    pub fn loans(&self) -> impl Iterator<Item = LoanView<'_>> {
        self.books.values().flat_map(|book| {
            book.copies.iter().filter_map(move |copy| {
                copy.loan.as_ref().map(|loan| LoanView {
                    book,
                    copy_number: copy.number,
                    loan,
                })
            })
        })
    }

    /// Loans held by one borrower, by call number then copy number
    pub fn loans_for<'a>(&'a self, email: &'a str) -> impl Iterator<Item = LoanView<'a>> + 'a {
        self.loans()
            .filter(move |view| view.loan.borrower_email == email)
    }

    /// Loans whose due date has passed as of `today`
    pub fn overdue_loans(&self, today: NaiveDate) -> Vec<LoanView<'_>> {
        self.loans().filter(|v| v.loan.is_overdue(today)).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats {
            books: self.books.len(),
            borrowers: self.borrowers.len(),
            ..CatalogStats::default()
        };
        for book in self.books.values() {
            stats.copies += book.copy_count();
        }
        for view in self.loans() {
            stats.loans += 1;
            if view.loan.renewed {
                stats.renewed_loans += 1;
            }
        }
        stats
    }
}
