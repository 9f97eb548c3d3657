//! Borrower CLI commands

use clap::Subcommand;

use crate::display::format_borrower_list;
use crate::error::{CatalogError, CatalogResult};
use crate::services::CatalogService;
use crate::storage::Storage;

/// Borrower subcommands
#[derive(Subcommand, Debug)]
pub enum BorrowerCommands {
    /// Register a new borrower
    Add {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address (must be unique)
        email: String,
        /// Phone number
        phone: String,
    },
    /// List all borrowers
    #[command(alias = "ls")]
    List {
        /// Print the CSV report instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Show a borrower and the copies they hold
    Show {
        /// Borrower email
        email: String,
    },
}

/// Handle a borrower command
pub fn handle_borrower_command(storage: &mut Storage, cmd: BorrowerCommands) -> CatalogResult<()> {
    match cmd {
        BorrowerCommands::Add {
            first_name,
            last_name,
            email,
            phone,
        } => {
            let borrower =
                CatalogService::new(storage).add_borrower(&first_name, &last_name, &email, &phone)?;
            println!("Added borrower: {}", borrower);
        }

        BorrowerCommands::List { csv } => {
            let catalog = storage.catalog();
            if csv {
                print!("{}", catalog.borrower_csv());
            } else {
                let rows = catalog
                    .borrowers()
                    .map(|b| (b, catalog.loans_for(&b.email).count()));
                println!("{}", format_borrower_list(rows));
            }
        }

        BorrowerCommands::Show { email } => {
            let info = storage
                .catalog()
                .borrower_info(&email)
                .ok_or_else(|| CatalogError::borrower_not_found(&email))?;
            print!("{}", info);
        }
    }

    Ok(())
}
