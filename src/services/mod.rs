//! Service layer for the library catalog
//!
//! The service layer sits between the CLI and storage: it validates input,
//! applies catalog operations, saves the result, and writes audit entries.

pub mod catalog;
pub mod import;
pub mod loan;

pub use catalog::{CatalogService, MAX_NEW_COPIES};
pub use import::{ImportService, ImportSummary};
pub use loan::LoanService;
