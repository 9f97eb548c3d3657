//! CSV Export functionality
//!
//! Writes the book and borrower CSV reports to any writer.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};

/// Write the book report, returning the number of books written
pub fn export_books_csv<W: Write>(catalog: &Catalog, writer: &mut W) -> CatalogResult<usize> {
    writer
        .write_all(catalog.book_csv().as_bytes())
        .map_err(|e| CatalogError::Export(e.to_string()))?;
    Ok(catalog.call_numbers().len())
}

/// Write the borrower report, returning the number of borrowers written
pub fn export_borrowers_csv<W: Write>(catalog: &Catalog, writer: &mut W) -> CatalogResult<usize> {
    writer
        .write_all(catalog.borrower_csv().as_bytes())
        .map_err(|e| CatalogError::Export(e.to_string()))?;
    Ok(catalog.emails().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_books_csv() {
        let mut catalog = Catalog::new();
        catalog.add_book("Title2", "Author2", "CallNumber2");
        catalog.add_book("Title1", "Author1", "CallNumber1");
        catalog.add_book_copy("CallNumber1");

        let mut output = Vec::new();
        let count = export_books_csv(&catalog, &mut output).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\"Title1\",\"Author1\",\"CallNumber1\",1\n\"Title2\",\"Author2\",\"CallNumber2\",0\n"
        );
    }

    #[test]
    fn test_export_borrowers_csv() {
        let mut catalog = Catalog::new();
        catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100");

        let mut output = Vec::new();
        assert_eq!(export_borrowers_csv(&catalog, &mut output).unwrap(), 1);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\"Ada\",\"Lovelace\",\"ada@example.com\",\"555-0100\"\n"
        );
    }
}
