//! Loan model
//!
//! A loan ties a copy to a borrower (by email) until the copy is returned.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// An active loan on a copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// Email of the borrower holding the copy
    pub borrower_email: String,

    /// Date the copy is due back
    pub due_date: NaiveDate,

    /// Whether the single renewal has been used
    #[serde(default)]
    pub renewed: bool,
}

impl Loan {
    /// Create a fresh, unrenewed loan
    pub fn new(borrower_email: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            borrower_email: borrower_email.into(),
            due_date,
            renewed: false,
        }
    }

    /// Whether the loan may still be renewed
    pub fn can_renew(&self) -> bool {
        !self.renewed
    }

    /// Extend the due date and mark the loan renewed
    ///
    /// Returns false without changes if the loan was already renewed or the
    /// new due date would fall outside the supported calendar.
    pub fn renew(&mut self, extension: Duration) -> bool {
        if !self.can_renew() {
            return false;
        }
        match self.due_date.checked_add_signed(extension) {
            Some(due_date) => {
                self.due_date = due_date;
                self.renewed = true;
                true
            }
            None => false,
        }
    }

    /// Whether the loan is past due on the given day
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_date < today
    }
}
