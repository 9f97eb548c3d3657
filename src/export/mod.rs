//! Export module for the library catalog
//!
//! Provides data export in multiple formats:
//! - CSV: the book and borrower reports
//! - JSON: machine-readable full catalog snapshot
//! - YAML: human-readable full catalog snapshot

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_books_csv, export_borrowers_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
