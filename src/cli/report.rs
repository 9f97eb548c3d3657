//! Catalog summary and audit history commands

use crate::error::CatalogResult;
use crate::storage::Storage;

/// Print catalog totals
pub fn handle_stats_command(storage: &Storage) -> CatalogResult<()> {
    let stats = storage.catalog().stats();

    println!("Catalog Summary");
    println!("===============");
    println!("Books:          {}", stats.books);
    println!("Copies:         {}", stats.copies);
    println!("Borrowers:      {}", stats.borrowers);
    println!("Active loans:   {}", stats.loans);
    println!("  Renewed:      {}", stats.renewed_loans);
    println!("Available:      {}", stats.copies - stats.loans);

    Ok(())
}

/// Print the most recent audit entries, oldest first
///
/// With `key`, only entries for that call number (and its copies and loans)
/// or that borrower email are considered.
pub fn handle_audit_command(
    storage: &Storage,
    limit: usize,
    key: Option<&str>,
) -> CatalogResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled.");
        return Ok(());
    };

    let mut entries = match key {
        Some(key) => logger.read_for_key(key)?,
        None => logger.read_all()?,
    };
    let entries = entries.split_off(entries.len().saturating_sub(limit));
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
