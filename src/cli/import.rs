//! CLI commands for data import
//!
//! Loads books and borrowers from the CSV reports, or restores a full
//! snapshot written by `export all`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::audit::EntityType;
use crate::error::{CatalogError, CatalogResult};
use crate::export::{import_from_json, import_from_yaml};
use crate::services::{ImportService, ImportSummary};
use crate::storage::Storage;

/// Import subcommands
#[derive(Subcommand, Debug)]
pub enum ImportCommands {
    /// Import books from a book report CSV
    Books {
        /// CSV file path
        file: PathBuf,
    },

    /// Import borrowers from a borrower report CSV
    Borrowers {
        /// CSV file path
        file: PathBuf,
    },

    /// Replace the catalog with a JSON or YAML snapshot
    Restore {
        /// Snapshot file path (.json, .yaml or .yml)
        file: PathBuf,

        /// Overwrite a catalog that already has data
        #[arg(long)]
        force: bool,
    },
}

/// Handle import commands
pub fn handle_import_command(storage: &mut Storage, cmd: ImportCommands) -> CatalogResult<()> {
    match cmd {
        ImportCommands::Books { file } => {
            let summary = ImportService::new(storage).import_books(open(&file)?)?;
            print_summary("books", &summary);
        }
        ImportCommands::Borrowers { file } => {
            let summary = ImportService::new(storage).import_borrowers(open(&file)?)?;
            print_summary("borrowers", &summary);
        }
        ImportCommands::Restore { file, force } => restore(storage, &file, force)?,
    }

    Ok(())
}

fn open(path: &Path) -> CatalogResult<File> {
    File::open(path)
        .map_err(|e| CatalogError::Import(format!("Failed to open {}: {}", path.display(), e)))
}

fn print_summary(what: &str, summary: &ImportSummary) {
    println!("Imported {} {}", summary.imported, what);
    if summary.skipped > 0 {
        println!("  Skipped (already present): {}", summary.skipped);
    }
    if !summary.errors.is_empty() {
        println!("  Errors: {}", summary.errors.len());
        for error in &summary.errors {
            println!("    {}", error);
        }
    }
}

fn restore(storage: &mut Storage, file: &Path, force: bool) -> CatalogResult<()> {
    let current = storage.catalog();
    if !force && (current.books().next().is_some() || current.borrowers().next().is_some()) {
        return Err(CatalogError::Import(
            "Catalog already has data; use --force to replace it".into(),
        ));
    }

    let content = fs::read_to_string(file)
        .map_err(|e| CatalogError::Import(format!("Failed to read {}: {}", file.display(), e)))?;
    let is_yaml = matches!(
        file.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let export = if is_yaml {
        import_from_yaml(&content)?
    } else {
        import_from_json(&content)?
    };
    let catalog = export.into_catalog()?;

    storage.replace_catalog(catalog);
    storage.save()?;

    let catalog = storage.catalog();
    for book in catalog.books() {
        storage.log_create(
            EntityType::Book,
            &book.call_number,
            Some(book.title.clone()),
            book,
        )?;
    }
    for borrower in catalog.borrowers() {
        storage.log_create(
            EntityType::Borrower,
            &borrower.email,
            Some(borrower.full_name()),
            borrower,
        )?;
    }

    let stats = catalog.stats();
    println!("Restored catalog from: {}", file.display());
    println!(
        "  {} books, {} copies, {} borrowers, {} active loans",
        stats.books, stats.copies, stats.borrowers, stats.loans
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LoanPolicy;
    use crate::export::export_full_json;
    use tempfile::TempDir;

    fn empty_storage(dir: &TempDir) -> Storage {
        Storage::new(dir.path().join("catalog.json"), LoanPolicy::default())
    }

    #[test]
    fn test_import_books_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("books.csv");
        fs::write(&file, "\"Dune\",\"Frank Herbert\",\"PS3558.E63\",2\n").unwrap();

        let mut storage = empty_storage(&temp_dir);
        handle_import_command(&mut storage, ImportCommands::Books { file }).unwrap();

        assert_eq!(storage.catalog().book("PS3558.E63").unwrap().copy_count(), 2);
    }

    #[test]
    fn test_import_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = empty_storage(&temp_dir);
        let result = handle_import_command(
            &mut storage,
            ImportCommands::Borrowers {
                file: temp_dir.path().join("nope.csv"),
            },
        );
        assert!(matches!(result, Err(CatalogError::Import(_))));
    }

    #[test]
    fn test_restore_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let mut source = empty_storage(&temp_dir);
        let catalog = source.catalog_mut();
        catalog.add_book("Dune", "Frank Herbert", "PS3558.E63");
        catalog.add_book_copy("PS3558.E63");
        catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100");
        catalog.checkout("PS3558.E63", 1, "ada@example.com");

        let file = temp_dir.path().join("snapshot.json");
        let mut out = File::create(&file).unwrap();
        export_full_json(source.catalog(), &mut out, true).unwrap();

        let mut target = Storage::new(temp_dir.path().join("restored.json"), LoanPolicy::default());
        handle_import_command(
            &mut target,
            ImportCommands::Restore {
                file: file.clone(),
                force: false,
            },
        )
        .unwrap();

        assert_eq!(target.catalog(), source.catalog());
        assert!(target.catalog_path().exists());

        // a second restore needs --force
        let again = handle_import_command(
            &mut target,
            ImportCommands::Restore { file, force: false },
        );
        assert!(matches!(again, Err(CatalogError::Import(_))));
    }
}
