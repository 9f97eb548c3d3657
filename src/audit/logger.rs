//! Audit logger for append-only audit log
//!
//! Provides the AuditLogger struct that writes audit entries to a log file.
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, CatalogResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file
///
/// The log file uses a line-delimited JSON format (JSONL) where each line
/// is a complete JSON object representing one audit entry.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    /// Path to the audit log file
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line, flushing immediately
    pub fn log(&self, entry: &AuditEntry) -> CatalogResult<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CatalogError::Io(format!("Failed to create audit log directory: {}", e))
            })?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| CatalogError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| CatalogError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| CatalogError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| CatalogError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries from the log file
    ///
    /// Returns entries in chronological order (oldest first).
    pub fn read_all(&self) -> CatalogResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| CatalogError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                CatalogError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                CatalogError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> CatalogResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let start = entries.len().saturating_sub(count);
        Ok(entries.split_off(start))
    }

    /// Entries about one book or borrower, in order
    ///
    /// A call number also matches the entries for that book's copies and
    /// loans, whose keys look like `"PS3558.E63 #2"`.
    pub fn read_for_key(&self, key: &str) -> CatalogResult<Vec<AuditEntry>> {
        let copy_prefix = format!("{} #", key);
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|e| e.entity_id == key || e.entity_id.starts_with(&copy_prefix))
            .collect())
    }

    /// Get the number of entries in the audit log
    pub fn entry_count(&self) -> CatalogResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
