//! CLI commands for data export
//!
//! Writes the CSV reports or a full catalog snapshot to a file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{CatalogError, CatalogResult};
use crate::export::{export_books_csv, export_borrowers_csv, export_full_json, export_full_yaml};
use crate::storage::Storage;

/// Snapshot format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SnapshotFormat {
    /// JSON (machine-readable)
    Json,
    /// YAML (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the book report as CSV
    Books {
        /// Output file path
        output: PathBuf,
    },

    /// Export the borrower report as CSV
    Borrowers {
        /// Output file path
        output: PathBuf,
    },

    /// Export the whole catalog, loans included
    All {
        /// Output file path
        output: PathBuf,

        /// Snapshot format
        #[arg(short, long, value_enum, default_value = "json")]
        format: SnapshotFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> CatalogResult<()> {
    let catalog = storage.catalog();

    match cmd {
        ExportCommands::Books { output } => {
            let count = write_to(&output, |w| export_books_csv(catalog, w))?;
            println!("Exported {} books to: {}", count, output.display());
        }
        ExportCommands::Borrowers { output } => {
            let count = write_to(&output, |w| export_borrowers_csv(catalog, w))?;
            println!("Exported {} borrowers to: {}", count, output.display());
        }
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            write_to(&output, |w| match format {
                SnapshotFormat::Json => export_full_json(catalog, w, pretty),
                SnapshotFormat::Yaml => export_full_yaml(catalog, w),
            })?;
            println!("Full catalog exported to: {}", output.display());
        }
    }

    Ok(())
}

/// Create `output`, run `export` against it, and flush
fn write_to<T>(
    output: &Path,
    export: impl FnOnce(&mut BufWriter<File>) -> CatalogResult<T>,
) -> CatalogResult<T> {
    let file = File::create(output).map_err(|e| {
        CatalogError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    let result = export(&mut writer)?;
    writer
        .flush()
        .map_err(|e| CatalogError::Export(format!("Failed to write {}: {}", output.display(), e)))?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LoanPolicy;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage(dir: &TempDir) -> Storage {
        let mut storage = Storage::new(dir.path().join("catalog.json"), LoanPolicy::default());
        let catalog = storage.catalog_mut();
        catalog.add_book("Dune", "Frank Herbert", "PS3558.E63");
        catalog.add_book_copy("PS3558.E63");
        catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100");
        storage
    }

    #[test]
    fn test_export_books_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        let output = temp_dir.path().join("books.csv");

        handle_export_command(
            &storage,
            ExportCommands::Books {
                output: output.clone(),
            },
        )
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "\"Dune\",\"Frank Herbert\",\"PS3558.E63\",1\n"
        );
    }

    #[test]
    fn test_export_all_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        let output = temp_dir.path().join("catalog.yaml");

        handle_export_command(
            &storage,
            ExportCommands::All {
                output: output.clone(),
                format: SnapshotFormat::Yaml,
                pretty: false,
            },
        )
        .unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.contains("PS3558.E63"));
        assert!(content.contains("ada@example.com"));
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let storage = create_test_storage(&temp_dir);
        let output = temp_dir.path().join("missing").join("books.csv");

        let result = handle_export_command(&storage, ExportCommands::Books { output });
        assert!(matches!(result, Err(CatalogError::Export(_))));
    }
}
