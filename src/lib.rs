//! Library catalog
//!
//! Core of a small lending library: books identified by call number, each
//! with numbered copies; borrowers identified by email; and loans that tie a
//! copy to a borrower until a due date, with at most one renewal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Books, copies, borrowers, and loans
//! - `catalog`: The in-memory catalog, loan policy, and text reports
//! - `storage`: JSON persistence of the whole catalog
//! - `services`: Catalog changes that save and audit as they go
//! - `audit`: Audit logging system
//! - `export`: CSV reports and full JSON/YAML snapshots
//! - `config`: Configuration and path management
//! - `display`: Terminal tables
//! - `cli`: Command handlers for the `library` binary
//!
//! # Example
//!
//! ```rust
//! use library_catalog::catalog::Catalog;
//!
//! let mut catalog = Catalog::new();
//! assert!(catalog.add_book("Dune", "Frank Herbert", "PS3558.E63"));
//! assert!(catalog.add_book_copy("PS3558.E63"));
//! assert!(catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100"));
//! assert!(catalog.checkout("PS3558.E63", 1, "ada@example.com"));
//! assert!(catalog.is_checked_out("PS3558.E63", 1));
//! ```

pub mod audit;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::CatalogError;
