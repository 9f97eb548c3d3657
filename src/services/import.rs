//! Import service
//!
//! Reads books and borrowers back from the catalog's CSV report format:
//! `"title","author","callNumber",copies` and `"first","last","email","phone"`,
//! one record per line with no header. Records whose key already exists are
//! skipped.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};

use crate::audit::EntityType;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, Borrower};
use crate::storage::Storage;

use super::catalog::MAX_NEW_COPIES;

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Records added to the catalog
    pub imported: usize,
    /// Records skipped because their key already existed
    pub skipped: usize,
    /// Per-line problems that stopped a record from being imported
    pub errors: Vec<String>,
}

/// Service for bulk-loading catalog records from CSV
pub struct ImportService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    fn records<R: Read>(reader: R) -> csv::StringRecordsIntoIter<R> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader)
            .into_records()
    }

    /// Import books; a missing copy count means zero copies
    ///
    /// Records are staged on a copy of the catalog. Nothing is applied,
    /// saved, or audited unless the whole file reads cleanly.
    pub fn import_books<R: Read>(&mut self, reader: R) -> CatalogResult<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut staged = self.storage.catalog().clone();
        let mut added = Vec::new();

        for (index, record) in Self::records(reader).enumerate() {
            let line = index + 1;
            let record =
                record.map_err(|e| CatalogError::Import(format!("line {}: {}", line, e)))?;

            let (book, copies) = match parse_book(&record) {
                Ok(parsed) => parsed,
                Err(msg) => {
                    summary.errors.push(format!("line {}: {}", line, msg));
                    continue;
                }
            };
            if staged
                .try_add_book(&book.title, &book.author, &book.call_number)
                .is_err()
            {
                summary.skipped += 1;
                continue;
            }
            for _ in 0..copies {
                staged.try_add_book_copy(&book.call_number)?;
            }
            added.push(book.call_number);
            summary.imported += 1;
        }

        if added.is_empty() {
            return Ok(summary);
        }

        self.storage.replace_catalog(staged);
        self.storage.save()?;
        let catalog = self.storage.catalog();
        for book in added.iter().filter_map(|call_number| catalog.book(call_number)) {
            self.storage.log_create(
                EntityType::Book,
                book.call_number.clone(),
                Some(book.title.clone()),
                book,
            )?;
        }
        Ok(summary)
    }

    /// Import borrowers, staged the same way as books
    pub fn import_borrowers<R: Read>(&mut self, reader: R) -> CatalogResult<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut staged = self.storage.catalog().clone();
        let mut added = Vec::new();

        for (index, record) in Self::records(reader).enumerate() {
            let line = index + 1;
            let record =
                record.map_err(|e| CatalogError::Import(format!("line {}: {}", line, e)))?;

            let borrower = match parse_borrower(&record) {
                Ok(borrower) => borrower,
                Err(msg) => {
                    summary.errors.push(format!("line {}: {}", line, msg));
                    continue;
                }
            };
            if staged
                .try_add_borrower(
                    &borrower.first_name,
                    &borrower.last_name,
                    &borrower.email,
                    &borrower.phone,
                )
                .is_err()
            {
                summary.skipped += 1;
                continue;
            }
            added.push(borrower);
            summary.imported += 1;
        }

        if added.is_empty() {
            return Ok(summary);
        }

        self.storage.replace_catalog(staged);
        self.storage.save()?;
        for borrower in &added {
            self.storage.log_create(
                EntityType::Borrower,
                borrower.email.clone(),
                Some(borrower.full_name()),
                borrower,
            )?;
        }
        Ok(summary)
    }
}

/// Turn a book record into a validated book and its copy count
fn parse_book(record: &StringRecord) -> Result<(Book, u32), String> {
    if record.len() < 3 || record.len() > 4 {
        return Err(format!("expected 3 or 4 fields, found {}", record.len()));
    }
    let book = Book::new(&record[0], &record[1], &record[2]);
    book.validate().map_err(|e| e.to_string())?;

    let copies = match record.get(3) {
        None | Some("") => 0,
        Some(n) => n
            .parse::<u32>()
            .map_err(|_| format!("invalid copy count '{}'", n))?,
    };
    if copies > MAX_NEW_COPIES {
        return Err(format!(
            "copy count {} exceeds the limit of {}",
            copies, MAX_NEW_COPIES
        ));
    }
    Ok((book, copies))
}

/// Turn a borrower record into a validated borrower
fn parse_borrower(record: &StringRecord) -> Result<Borrower, String> {
    if record.len() != 4 {
        return Err(format!("expected 4 fields, found {}", record.len()));
    }
    let borrower = Borrower::new(&record[0], &record[1], &record[2], &record[3]);
    borrower.validate().map_err(|e| e.to_string())?;
    Ok(borrower)
}
