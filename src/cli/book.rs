//! Book CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_book_details, format_book_list};
use crate::error::{CatalogError, CatalogResult};
use crate::services::CatalogService;
use crate::storage::Storage;

/// Book subcommands
#[derive(Subcommand, Debug)]
pub enum BookCommands {
    /// Add a new book
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
        /// Call number (must be unique)
        call_number: String,
        /// Number of copies to add right away
        #[arg(short, long, default_value = "0")]
        copies: u32,
    },
    /// Add a copy of an existing book
    #[command(alias = "add-copy")]
    Copy {
        /// Call number of the book
        call_number: String,
    },
    /// List all books
    #[command(alias = "ls")]
    List {
        /// Print the CSV report instead of a table
        #[arg(long)]
        csv: bool,
    },
    /// Show a book and the state of each copy
    Show {
        /// Call number of the book
        call_number: String,
        /// Show a single copy in report format
        #[arg(short = 'n', long)]
        copy: Option<u32>,
    },
}

/// Handle a book command
pub fn handle_book_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BookCommands,
) -> CatalogResult<()> {
    match cmd {
        BookCommands::Add {
            title,
            author,
            call_number,
            copies,
        } => {
            let book = CatalogService::new(storage).add_book(&title, &author, &call_number, copies)?;
            println!("Added book: {}", book);
            if copies > 0 {
                println!("  Copies: {}", book.copy_count());
            }
        }

        BookCommands::Copy { call_number } => {
            let number = CatalogService::new(storage).add_copy(&call_number)?;
            println!("Added copy #{} of '{}'", number, call_number);
        }

        BookCommands::List { csv } => {
            let catalog = storage.catalog();
            if csv {
                print!("{}", catalog.book_csv());
            } else {
                println!("{}", format_book_list(catalog.books()));
            }
        }

        BookCommands::Show { call_number, copy } => {
            let catalog = storage.catalog();
            match copy {
                Some(number) => {
                    let info = catalog
                        .copy_info(&call_number, number)
                        .ok_or_else(|| CatalogError::copy_not_found(&call_number, number))?;
                    println!("{}", info);
                }
                None => {
                    let book = catalog
                        .book(&call_number)
                        .ok_or_else(|| CatalogError::book_not_found(&call_number))?;
                    print!("{}", format_book_details(book, &settings.date_format));
                }
            }
        }
    }

    Ok(())
}
