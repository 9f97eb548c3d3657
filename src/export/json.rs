//! JSON Export functionality
//!
//! Exports the complete catalog to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, Borrower};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full catalog export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All books with their copies and active loans
    pub books: Vec<Book>,

    /// All borrowers
    pub borrowers: Vec<Borrower>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub book_count: usize,
    pub copy_count: usize,
    pub borrower_count: usize,
    pub active_loan_count: usize,
    /// Earliest due date among active loans
    pub earliest_due: Option<String>,
}

impl FullExport {
    /// Snapshot a catalog
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let stats = catalog.stats();
        let earliest_due = catalog
            .loans()
            .map(|view| view.loan.due_date)
            .min()
            .map(|d| d.to_string());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            books: catalog.books().cloned().collect(),
            borrowers: catalog.borrowers().cloned().collect(),
            metadata: ExportMetadata {
                book_count: stats.books,
                copy_count: stats.copies,
                borrower_count: stats.borrowers,
                active_loan_count: stats.loans,
                earliest_due,
            },
        }
    }

    /// Check the export can be turned back into a catalog
    pub fn validate(&self) -> Result<(), String> {
        if !self.schema_version.starts_with("1.") {
            return Err(format!(
                "Unsupported schema version: {}",
                self.schema_version
            ));
        }
        if self.books.len() != self.metadata.book_count {
            return Err(format!(
                "Book count mismatch: {} listed, {} in metadata",
                self.books.len(),
                self.metadata.book_count
            ));
        }
        if self.borrowers.len() != self.metadata.borrower_count {
            return Err(format!(
                "Borrower count mismatch: {} listed, {} in metadata",
                self.borrowers.len(),
                self.metadata.borrower_count
            ));
        }
        Ok(())
    }

    /// Rebuild the catalog this export was taken from
    pub fn into_catalog(self) -> CatalogResult<Catalog> {
        Catalog::from_parts(self.books, self.borrowers)
    }
}

/// Export the full catalog to JSON
pub fn export_full_json<W: Write>(
    catalog: &Catalog,
    writer: &mut W,
    pretty: bool,
) -> CatalogResult<()> {
    let export = FullExport::from_catalog(catalog);

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };
    result.map_err(|e| CatalogError::Export(e.to_string()))
}

/// Import from a JSON export
pub fn import_from_json(json_str: &str) -> CatalogResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| CatalogError::Import(e.to_string()))?;
    export.validate().map_err(CatalogError::Import)?;
    Ok(export)
}
