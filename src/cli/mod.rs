//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod book;
pub mod borrower;
pub mod config;
pub mod export;
pub mod import;
pub mod loan;
pub mod report;

pub use book::{handle_book_command, BookCommands};
pub use borrower::{handle_borrower_command, BorrowerCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use export::{handle_export_command, ExportCommands, SnapshotFormat};
pub use import::{handle_import_command, ImportCommands};
pub use loan::{handle_loan_command, LoanCommands};
pub use report::{handle_audit_command, handle_stats_command};
