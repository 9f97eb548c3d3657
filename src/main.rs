use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use library_catalog::cli::{
    handle_audit_command, handle_book_command, handle_borrower_command, handle_config_command,
    handle_export_command, handle_import_command, handle_loan_command, handle_stats_command,
    BookCommands, BorrowerCommands, ConfigArgs, ExportCommands, ImportCommands, LoanCommands,
};
use library_catalog::config::{CatalogPaths, Settings};
use library_catalog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "library",
    author = "Kaylee Beyene",
    version,
    about = "Command-line catalog for a small lending library",
    long_about = "Keeps track of books, the numbered copies of each book, and \
                  the borrowers who have them checked out. Loans run for a fixed \
                  period and may be renewed once."
)]
struct Cli {
    /// Catalog file to use instead of the default one
    #[arg(long, global = true, env = "LIBRARY_CATALOG_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Book and copy management commands
    #[command(subcommand)]
    Book(BookCommands),

    /// Borrower management commands
    #[command(subcommand)]
    Borrower(BorrowerCommands),

    /// Checkout, return, and renewal commands
    #[command(subcommand)]
    Loan(LoanCommands),

    /// Export the catalog
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import books, borrowers, or a full snapshot
    #[command(subcommand)]
    Import(ImportCommands),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Only entries for this call number or borrower email
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration and paths, optionally changing settings
    Config(ConfigArgs),

    /// Show catalog totals
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CatalogPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let mut storage = Storage::open(&paths, &settings, cli.db)?;

    match cli.command {
        Some(Commands::Book(cmd)) => handle_book_command(&mut storage, &settings, cmd)?,
        Some(Commands::Borrower(cmd)) => handle_borrower_command(&mut storage, cmd)?,
        Some(Commands::Loan(cmd)) => handle_loan_command(&mut storage, &settings, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Import(cmd)) => handle_import_command(&mut storage, cmd)?,
        Some(Commands::Audit { limit, key }) => {
            handle_audit_command(&storage, limit, key.as_deref())?
        }
        Some(Commands::Config(args)) => handle_config_command(&paths, &storage, &settings, args)?,
        Some(Commands::Stats) => handle_stats_command(&storage)?,
        None => {
            println!("library - lending library catalog");
            println!();
            println!("Run 'library --help' for usage information.");
        }
    }

    Ok(())
}
