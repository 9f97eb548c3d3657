//! Loan service
//!
//! Runs checkouts, returns, and renewals against the stored catalog, saving
//! after each change and writing the matching audit entry.

use chrono::NaiveDate;

use crate::audit::{generate_diff, EntityType};
use crate::catalog::{self, LoanView};
use crate::error::CatalogResult;
use crate::models::Loan;
use crate::storage::Storage;

/// Service for circulating copies
pub struct LoanService<'a> {
    storage: &'a mut Storage,
    today: NaiveDate,
}

impl<'a> LoanService<'a> {
    /// Create a loan service dated today
    pub fn new(storage: &'a mut Storage) -> Self {
        Self::with_today(storage, catalog::today())
    }

    /// Create a loan service that treats `today` as the current date
    pub fn with_today(storage: &'a mut Storage, today: NaiveDate) -> Self {
        Self { storage, today }
    }

    fn copy_id(call_number: &str, copy_number: u32) -> String {
        format!("{} #{}", call_number, copy_number)
    }

    fn title_of(&self, call_number: &str) -> Option<String> {
        self.storage
            .catalog()
            .book(call_number)
            .map(|b| b.title.clone())
    }

    /// Lend a copy to a borrower
    pub fn checkout(
        &mut self,
        call_number: &str,
        copy_number: u32,
        email: &str,
    ) -> CatalogResult<Loan> {
        let loan = self
            .storage
            .catalog_mut()
            .try_checkout_on(call_number, copy_number, email, self.today)?;

        self.storage.save()?;
        self.storage.log_create(
            EntityType::Loan,
            Self::copy_id(call_number, copy_number),
            self.title_of(call_number),
            &loan,
        )?;

        Ok(loan)
    }

    /// Take a copy back, returning the loan that ended
    pub fn return_copy(&mut self, call_number: &str, copy_number: u32) -> CatalogResult<Loan> {
        let loan = self
            .storage
            .catalog_mut()
            .try_return_copy(call_number, copy_number)?;

        self.storage.save()?;
        self.storage.log_delete(
            EntityType::Loan,
            Self::copy_id(call_number, copy_number),
            self.title_of(call_number),
            &loan,
        )?;

        Ok(loan)
    }

    /// Extend a loan once
    pub fn renew(&mut self, call_number: &str, copy_number: u32) -> CatalogResult<Loan> {
        let before = self
            .storage
            .catalog()
            .loan(call_number, copy_number)
            .cloned();
        let after = self.storage.catalog_mut().try_renew(call_number, copy_number)?;

        self.storage.save()?;
        let before = before.unwrap_or_else(|| after.clone());
        let diff = generate_diff(&serde_json::to_value(&before)?, &serde_json::to_value(&after)?);
        self.storage.log_update(
            EntityType::Loan,
            Self::copy_id(call_number, copy_number),
            self.title_of(call_number),
            &before,
            &after,
            diff,
        )?;

        Ok(after)
    }

    /// Loans due before the service's current date
    pub fn overdue(&self) -> Vec<LoanView<'_>> {
        self.storage.catalog().overdue_loans(self.today)
    }

    /// Whole days until the copy is due; negative when overdue
    pub fn days_until_due(&self, call_number: &str, copy_number: u32) -> Option<i64> {
        self.storage
            .catalog()
            .due_date(call_number, copy_number)
            .map(|due| (due - self.today).num_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditLogger, Operation};
    use crate::catalog::LoanPolicy;
    use crate::error::CatalogError;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let mut storage =
            Storage::new(temp_dir.path().join("catalog.json"), LoanPolicy::default())
                .with_audit(AuditLogger::new(temp_dir.path().join("audit.log")));

        let catalog = storage.catalog_mut();
        catalog.add_book("Dune", "Frank Herbert", "PS3558.E63");
        catalog.add_book_copy("PS3558.E63");
        catalog.add_book_copy("PS3558.E63");
        catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100");
        (temp_dir, storage)
    }

    #[test]
    fn test_checkout_persists_and_audits() {
        let (temp_dir, mut storage) = create_test_storage();
        let mut service = LoanService::with_today(&mut storage, date(2025, 1, 1));

        let loan = service.checkout("PS3558.E63", 1, "ada@example.com").unwrap();
        assert_eq!(loan.due_date, date(2025, 1, 29));

        let mut reopened = Storage::new(temp_dir.path().join("catalog.json"), LoanPolicy::default());
        reopened.load().unwrap();
        assert!(reopened.catalog().is_checked_out("PS3558.E63", 1));

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_type, EntityType::Loan);
        assert_eq!(entries[0].entity_id, "PS3558.E63 #1");
        assert_eq!(entries[0].entity_name.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_refusals_are_not_audited() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LoanService::with_today(&mut storage, date(2025, 1, 1));

        assert!(service.checkout("PS3558.E63", 3, "ada@example.com").is_err());
        assert!(service.return_copy("PS3558.E63", 1).is_err());
        assert!(service.renew("PS3558.E63", 1).is_err());

        assert_eq!(storage.audit().unwrap().entry_count().unwrap(), 0);
        assert!(!storage.catalog_path().exists());
    }

    #[test]
    fn test_renew_records_diff() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LoanService::with_today(&mut storage, date(2025, 1, 1));

        service.checkout("PS3558.E63", 2, "ada@example.com").unwrap();
        let renewed = service.renew("PS3558.E63", 2).unwrap();
        assert_eq!(renewed.due_date, date(2025, 2, 26));
        assert!(matches!(
            service.renew("PS3558.E63", 2),
            Err(CatalogError::AlreadyRenewed { .. })
        ));

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].operation, Operation::Update);
        let diff = entries[1].diff_summary.as_deref().unwrap();
        assert!(diff.contains("renewed: false -> true"));
        assert!(diff.contains("2025-02-26"));
    }

    #[test]
    fn test_return_logs_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = LoanService::with_today(&mut storage, date(2025, 1, 1));

        service.checkout("PS3558.E63", 1, "ada@example.com").unwrap();
        let ended = service.return_copy("PS3558.E63", 1).unwrap();
        assert_eq!(ended.borrower_email, "ada@example.com");

        let entries = storage.audit().unwrap().read_all().unwrap();
        assert_eq!(entries[1].operation, Operation::Delete);
        assert!(!storage.catalog().is_checked_out("PS3558.E63", 1));
    }

    #[test]
    fn test_overdue_and_days_until_due() {
        let (_temp_dir, mut storage) = create_test_storage();
        LoanService::with_today(&mut storage, date(2025, 1, 1))
            .checkout("PS3558.E63", 1, "ada@example.com")
            .unwrap();

        let later = LoanService::with_today(&mut storage, date(2025, 2, 3));
        assert_eq!(later.days_until_due("PS3558.E63", 1), Some(-5));
        assert_eq!(later.days_until_due("PS3558.E63", 2), None);
        assert_eq!(later.overdue().len(), 1);
    }
}
