//! Loan period policy

use chrono::Duration;

use crate::error::{CatalogError, CatalogResult};

/// Default length of a loan and of its single renewal, in days
pub const DEFAULT_LOAN_DAYS: u32 = 28;

/// Longest allowed loan or renewal period, in days
pub const MAX_LOAN_DAYS: u32 = 3650;

/// How long checkouts and renewals last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanPolicy {
    /// Days from checkout to due date
    pub loan_days: u32,
    /// Days a renewal adds to the due date
    pub renewal_days: u32,
}

impl Default for LoanPolicy {
    fn default() -> Self {
        Self {
            loan_days: DEFAULT_LOAN_DAYS,
            renewal_days: DEFAULT_LOAN_DAYS,
        }
    }
}

impl LoanPolicy {
    /// Build a policy, rejecting periods outside 1..=`MAX_LOAN_DAYS` days
    pub fn new(loan_days: u32, renewal_days: u32) -> CatalogResult<Self> {
        let in_range = 1..=MAX_LOAN_DAYS;
        if !in_range.contains(&loan_days) || !in_range.contains(&renewal_days) {
            return Err(CatalogError::Validation(format!(
                "Loan and renewal periods must be between 1 and {} days",
                MAX_LOAN_DAYS
            )));
        }
        Ok(Self {
            loan_days,
            renewal_days,
        })
    }

    pub fn loan_period(&self) -> Duration {
        Duration::days(i64::from(self.loan_days))
    }

    pub fn renewal_period(&self) -> Duration {
        Duration::days(i64::from(self.renewal_days))
    }
}
