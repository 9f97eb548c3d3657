//! In-memory catalog store
//!
//! Holds the book table (with nested copies and their loans) and the borrower
//! table, and enforces the checkout, return, and renewal rules for each copy:
//!
//! ```text
//! Available --checkout--> OnLoan(renewed=false) --renew--> OnLoan(renewed=true)
//!     ^                          |                               |
//!     +---------return-----------+-------------return------------+
//! ```
//!
//! Every mutating operation comes in two forms. The `try_` form returns a
//! [`CatalogError`] naming why it was refused; the plain form reports only
//! success as a `bool`. A refused operation never changes the store.

pub mod policy;
pub mod report;

pub use policy::{LoanPolicy, DEFAULT_LOAN_DAYS, MAX_LOAN_DAYS};
pub use report::{CatalogStats, LoanView};

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, Borrower, Loan};

/// The library's books, copies, borrowers, and active loans
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: BTreeMap<String, Book>,
    borrowers: BTreeMap<String, Borrower>,
    policy: LoanPolicy,
}

impl Catalog {
    /// Create an empty catalog with the default loan policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with a custom loan policy
    pub fn with_policy(policy: LoanPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Rebuild a catalog from stored records, checking every table invariant
    pub fn from_parts(books: Vec<Book>, borrowers: Vec<Borrower>) -> CatalogResult<Self> {
        let mut catalog = Self::new();

        for borrower in borrowers {
            if catalog.borrowers.contains_key(&borrower.email) {
                return Err(CatalogError::Storage(format!(
                    "Duplicate borrower email: {}",
                    borrower.email
                )));
            }
            catalog.borrowers.insert(borrower.email.clone(), borrower);
        }

        for book in books {
            if catalog.books.contains_key(&book.call_number) {
                return Err(CatalogError::Storage(format!(
                    "Duplicate call number: {}",
                    book.call_number
                )));
            }
            if !book.has_dense_copy_numbers() {
                return Err(CatalogError::Storage(format!(
                    "Copy numbers of '{}' are not sequential from 1",
                    book.call_number
                )));
            }
            for copy in &book.copies {
                if let Some(loan) = &copy.loan {
                    if !catalog.borrowers.contains_key(&loan.borrower_email) {
                        return Err(CatalogError::Storage(format!(
                            "Copy {} of '{}' is loaned to unknown borrower {}",
                            copy.number, book.call_number, loan.borrower_email
                        )));
                    }
                }
            }
            catalog.books.insert(book.call_number.clone(), book);
        }

        Ok(catalog)
    }

    pub fn policy(&self) -> LoanPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: LoanPolicy) {
        self.policy = policy;
    }

    // --- Books and borrowers ---

    /// Add a book with no copies, failing if the call number is taken
    pub fn try_add_book(
        &mut self,
        title: &str,
        author: &str,
        call_number: &str,
    ) -> CatalogResult<()> {
        if self.books.contains_key(call_number) {
            return Err(CatalogError::Duplicate {
                entity_type: "Book",
                identifier: call_number.to_string(),
            });
        }
        self.books.insert(
            call_number.to_string(),
            Book::new(title, author, call_number),
        );
        Ok(())
    }

    /// Add a book with no copies; false if the call number already exists
    pub fn add_book(&mut self, title: &str, author: &str, call_number: &str) -> bool {
        self.try_add_book(title, author, call_number).is_ok()
    }

    /// Append a copy to a book, returning its new copy number
    pub fn try_add_book_copy(&mut self, call_number: &str) -> CatalogResult<u32> {
        let book = self
            .books
            .get_mut(call_number)
            .ok_or_else(|| CatalogError::book_not_found(call_number))?;
        Ok(book.add_copy())
    }

    /// Append a copy to a book; false if the book does not exist
    pub fn add_book_copy(&mut self, call_number: &str) -> bool {
        self.try_add_book_copy(call_number).is_ok()
    }

    /// Register a borrower, failing if the email is taken
    pub fn try_add_borrower(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> CatalogResult<()> {
        if self.borrowers.contains_key(email) {
            return Err(CatalogError::Duplicate {
                entity_type: "Borrower",
                identifier: email.to_string(),
            });
        }
        self.borrowers.insert(
            email.to_string(),
            Borrower::new(first_name, last_name, email, phone),
        );
        Ok(())
    }

    /// Register a borrower; false if the email already exists
    pub fn add_borrower(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> bool {
        self.try_add_borrower(first_name, last_name, email, phone)
            .is_ok()
    }

    /// All call numbers, ascending
    pub fn call_numbers(&self) -> BTreeSet<String> {
        self.books.keys().cloned().collect()
    }

    /// All borrower emails, ascending
    pub fn emails(&self) -> BTreeSet<String> {
        self.borrowers.keys().cloned().collect()
    }

    pub fn book(&self, call_number: &str) -> Option<&Book> {
        self.books.get(call_number)
    }

    pub fn borrower(&self, email: &str) -> Option<&Borrower> {
        self.borrowers.get(email)
    }

    /// Books in call-number order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    /// Borrowers in email order
    pub fn borrowers(&self) -> impl Iterator<Item = &Borrower> {
        self.borrowers.values()
    }

    // --- Loans ---

    /// Check out a copy to a borrower as of `today`, returning the new loan
    pub fn try_checkout_on(
        &mut self,
        call_number: &str,
        copy_number: u32,
        email: &str,
        today: NaiveDate,
    ) -> CatalogResult<Loan> {
        if !self.borrowers.contains_key(email) {
            return Err(CatalogError::borrower_not_found(email));
        }
        let loan_period = self.policy.loan_period();

        let book = self
            .books
            .get_mut(call_number)
            .ok_or_else(|| CatalogError::book_not_found(call_number))?;
        let copy = book
            .copy_mut(copy_number)
            .ok_or_else(|| CatalogError::copy_not_found(call_number, copy_number))?;

        if copy.is_checked_out() {
            return Err(CatalogError::AlreadyOnLoan {
                call_number: call_number.to_string(),
                copy_number,
            });
        }

        let due_date = today.checked_add_signed(loan_period).ok_or_else(|| {
            CatalogError::Validation(format!("Due date out of range for checkout on {}", today))
        })?;
        let loan = Loan::new(email, due_date);
        copy.loan = Some(loan.clone());
        Ok(loan)
    }

    /// Check out a copy to a borrower, due four weeks from today
    pub fn try_checkout(
        &mut self,
        call_number: &str,
        copy_number: u32,
        email: &str,
    ) -> CatalogResult<Loan> {
        self.try_checkout_on(call_number, copy_number, email, today())
    }

    /// Check out a copy as of `today`; false on any missing entity or existing loan
    pub fn checkout_on(
        &mut self,
        call_number: &str,
        copy_number: u32,
        email: &str,
        today: NaiveDate,
    ) -> bool {
        self.try_checkout_on(call_number, copy_number, email, today)
            .is_ok()
    }

    /// Check out a copy; false on any missing entity or existing loan
    pub fn checkout(&mut self, call_number: &str, copy_number: u32, email: &str) -> bool {
        self.try_checkout(call_number, copy_number, email).is_ok()
    }

    /// The active loan on a copy, if any
    pub fn loan(&self, call_number: &str, copy_number: u32) -> Option<&Loan> {
        self.books
            .get(call_number)?
            .copy(copy_number)?
            .loan
            .as_ref()
    }

    /// Whether a copy is on loan; false for unknown books or copies
    pub fn is_checked_out(&self, call_number: &str, copy_number: u32) -> bool {
        self.loan(call_number, copy_number).is_some()
    }

    /// Due date of the active loan; `None` if available or unknown
    pub fn due_date(&self, call_number: &str, copy_number: u32) -> Option<NaiveDate> {
        self.loan(call_number, copy_number).map(|l| l.due_date)
    }

    /// Return a checked-out copy, handing back the loan that was cleared
    pub fn try_return_copy(&mut self, call_number: &str, copy_number: u32) -> CatalogResult<Loan> {
        let copy = self
            .books
            .get_mut(call_number)
            .ok_or_else(|| CatalogError::book_not_found(call_number))?
            .copy_mut(copy_number)
            .ok_or_else(|| CatalogError::copy_not_found(call_number, copy_number))?;

        copy.loan.take().ok_or_else(|| CatalogError::NotOnLoan {
            call_number: call_number.to_string(),
            copy_number,
        })
    }

    /// Return a copy; false if it was not checked out
    pub fn return_copy(&mut self, call_number: &str, copy_number: u32) -> bool {
        self.try_return_copy(call_number, copy_number).is_ok()
    }

    /// Renew an unrenewed loan, returning the extended loan
    pub fn try_renew(&mut self, call_number: &str, copy_number: u32) -> CatalogResult<Loan> {
        let extension = self.policy.renewal_period();
        let loan = self
            .books
            .get_mut(call_number)
            .ok_or_else(|| CatalogError::book_not_found(call_number))?
            .copy_mut(copy_number)
            .ok_or_else(|| CatalogError::copy_not_found(call_number, copy_number))?
            .loan
            .as_mut()
            .ok_or_else(|| CatalogError::NotOnLoan {
                call_number: call_number.to_string(),
                copy_number,
            })?;

        if !loan.can_renew() {
            return Err(CatalogError::AlreadyRenewed {
                call_number: call_number.to_string(),
                copy_number,
            });
        }
        if !loan.renew(extension) {
            return Err(CatalogError::Validation(format!(
                "Renewed due date out of range for copy {} of '{}'",
                copy_number, call_number
            )));
        }
        Ok(loan.clone())
    }

    /// Renew a loan once; false if not checked out or already renewed
    pub fn renew(&mut self, call_number: &str, copy_number: u32) -> bool {
        self.try_renew(call_number, copy_number).is_ok()
    }
}

/// The current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
