//! Loan CLI commands
//!
//! Checkout, return, and renewal of individual copies.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_loan_list;
use crate::error::{CatalogError, CatalogResult};
use crate::services::LoanService;
use crate::storage::Storage;

/// Loan subcommands
#[derive(Subcommand, Debug)]
pub enum LoanCommands {
    /// Check out a copy to a borrower
    #[command(alias = "out")]
    Checkout {
        /// Call number of the book
        call_number: String,
        /// Copy number
        copy: u32,
        /// Borrower email
        email: String,
    },
    /// Return a checked-out copy
    #[command(alias = "in")]
    Return {
        /// Call number of the book
        call_number: String,
        /// Copy number
        copy: u32,
    },
    /// Renew a loan (once per loan)
    Renew {
        /// Call number of the book
        call_number: String,
        /// Copy number
        copy: u32,
    },
    /// Show whether a copy is checked out and when it is due
    Status {
        /// Call number of the book
        call_number: String,
        /// Copy number
        copy: u32,
    },
    /// List all active loans
    #[command(alias = "ls")]
    List,
    /// List loans past their due date
    Overdue,
}

/// Handle a loan command
pub fn handle_loan_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: LoanCommands,
) -> CatalogResult<()> {
    let date_format = settings.date_format.as_str();

    match cmd {
        LoanCommands::Checkout {
            call_number,
            copy,
            email,
        } => {
            let loan = LoanService::new(storage).checkout(&call_number, copy, &email)?;
            println!(
                "Checked out copy #{} of '{}' to {}",
                copy, call_number, loan.borrower_email
            );
            println!("  Due: {}", loan.due_date.format(date_format));
        }

        LoanCommands::Return { call_number, copy } => {
            let loan = LoanService::new(storage).return_copy(&call_number, copy)?;
            println!(
                "Returned copy #{} of '{}' from {}",
                copy, call_number, loan.borrower_email
            );
        }

        LoanCommands::Renew { call_number, copy } => {
            let loan = LoanService::new(storage).renew(&call_number, copy)?;
            println!("Renewed copy #{} of '{}'", copy, call_number);
            println!("  New due date: {}", loan.due_date.format(date_format));
        }

        LoanCommands::Status { call_number, copy } => {
            let info = storage
                .catalog()
                .copy_info(&call_number, copy)
                .ok_or_else(|| CatalogError::copy_not_found(&call_number, copy))?;
            println!("{}", info);

            if let Some(days) = LoanService::new(storage).days_until_due(&call_number, copy) {
                match days {
                    d if d < 0 => println!("  Overdue by {} days", -d),
                    0 => println!("  Due today"),
                    d => println!("  Due in {} days", d),
                }
            }
        }

        LoanCommands::List => {
            let loans: Vec<_> = storage.catalog().loans().collect();
            println!("{}", format_loan_list(&loans, date_format));
        }

        LoanCommands::Overdue => {
            let service = LoanService::new(storage);
            let overdue = service.overdue();
            if overdue.is_empty() {
                println!("No overdue loans.");
            } else {
                println!("{}", format_loan_list(&overdue, date_format));
            }
        }
    }

    Ok(())
}
