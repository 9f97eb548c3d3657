//! On-disk encoding of the whole catalog
//!
//! The catalog is stored as one JSON document:
//!
//! ```json
//! {
//!   "schema_version": 1,
//!   "books": [{ "title": "...", "author": "...", "call_number": "...",
//!               "copies": [{ "number": 1, "loan": { ... } }] }],
//!   "borrowers": [{ "first_name": "...", "last_name": "...",
//!                   "email": "...", "phone": "..." }]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Book, Borrower};

/// Current catalog file schema
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    schema_version: u32,
    #[serde(default)]
    books: Vec<Book>,
    #[serde(default)]
    borrowers: Vec<Borrower>,
}

/// Serialize the whole catalog
pub fn encode(catalog: &Catalog) -> CatalogResult<Vec<u8>> {
    let file = CatalogFile {
        schema_version: SCHEMA_VERSION,
        books: catalog.books().cloned().collect(),
        borrowers: catalog.borrowers().cloned().collect(),
    };
    serde_json::to_vec_pretty(&file)
        .map_err(|e| CatalogError::Storage(format!("Failed to serialize catalog: {}", e)))
}

/// Rebuild a catalog from bytes produced by [`encode`]
pub fn decode(bytes: &[u8]) -> CatalogResult<Catalog> {
    let file: CatalogFile = serde_json::from_slice(bytes)
        .map_err(|e| CatalogError::Storage(format!("Failed to parse catalog: {}", e)))?;

    if file.schema_version > SCHEMA_VERSION {
        return Err(CatalogError::Storage(format!(
            "Catalog schema version {} is newer than supported version {}",
            file.schema_version, SCHEMA_VERSION
        )));
    }

    Catalog::from_parts(file.books, file.borrowers)
}
