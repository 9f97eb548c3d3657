//! Catalog service
//!
//! Adds books, copies, and borrowers with input validation, persisting the
//! catalog and recording each addition in the audit log.

use crate::audit::EntityType;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, Borrower};
use crate::storage::Storage;

/// Most copies a single add or import may create at once
pub const MAX_NEW_COPIES: u32 = 1000;

/// Service for growing the collection and the borrower list
pub struct CatalogService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CatalogService<'a> {
    /// Create a new catalog service
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Add a book along with `copies` initial copies
    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        call_number: &str,
        copies: u32,
    ) -> CatalogResult<Book> {
        let candidate = Book::new(title.trim(), author.trim(), call_number.trim());
        candidate
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;
        if copies > MAX_NEW_COPIES {
            return Err(CatalogError::Validation(format!(
                "Cannot add {} copies at once (max {})",
                copies, MAX_NEW_COPIES
            )));
        }

        let catalog = self.storage.catalog_mut();
        catalog.try_add_book(&candidate.title, &candidate.author, &candidate.call_number)?;
        for _ in 0..copies {
            catalog.try_add_book_copy(&candidate.call_number)?;
        }
        let book = catalog
            .book(&candidate.call_number)
            .cloned()
            .ok_or_else(|| CatalogError::book_not_found(&candidate.call_number))?;

        self.storage.save()?;
        self.storage.log_create(
            EntityType::Book,
            book.call_number.clone(),
            Some(book.title.clone()),
            &book,
        )?;

        Ok(book)
    }

    /// Add one copy to an existing book, returning its copy number
    pub fn add_copy(&mut self, call_number: &str) -> CatalogResult<u32> {
        let call_number = call_number.trim();
        let number = self.storage.catalog_mut().try_add_book_copy(call_number)?;
        let title = Some(self.get_book(call_number)?.title.clone());

        self.storage.save()?;
        self.storage.log_create(
            EntityType::Copy,
            format!("{} #{}", call_number, number),
            title,
            &serde_json::json!({ "call_number": call_number, "number": number }),
        )?;

        Ok(number)
    }

    /// Register a new borrower
    pub fn add_borrower(
        &mut self,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: &str,
    ) -> CatalogResult<Borrower> {
        let borrower = Borrower::new(first_name.trim(), last_name.trim(), email.trim(), phone.trim());
        borrower
            .validate()
            .map_err(|e| CatalogError::Validation(e.to_string()))?;

        self.storage.catalog_mut().try_add_borrower(
            &borrower.first_name,
            &borrower.last_name,
            &borrower.email,
            &borrower.phone,
        )?;

        self.storage.save()?;
        self.storage.log_create(
            EntityType::Borrower,
            borrower.email.clone(),
            Some(borrower.full_name()),
            &borrower,
        )?;

        Ok(borrower)
    }

    /// Find a book by call number
    pub fn get_book(&self, call_number: &str) -> CatalogResult<&Book> {
        self.storage
            .catalog()
            .book(call_number)
            .ok_or_else(|| CatalogError::book_not_found(call_number))
    }
}
