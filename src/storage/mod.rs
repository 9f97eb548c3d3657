//! Storage layer for the library catalog
//!
//! Loads the whole catalog from one JSON file, writes it back atomically, and
//! forwards change records to the audit log.

pub mod codec;
pub mod file_io;

pub use codec::{decode, encode, SCHEMA_VERSION};
pub use file_io::{read_json, write_atomic, write_json_atomic};

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::catalog::{Catalog, LoanPolicy};
use crate::config::{CatalogPaths, Settings};
use crate::error::CatalogError;

/// Owns the loaded catalog and knows where it lives on disk
#[derive(Debug)]
pub struct Storage {
    catalog_path: PathBuf,
    catalog: Catalog,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create storage around an empty catalog without touching the disk
    pub fn new(catalog_path: PathBuf, policy: LoanPolicy) -> Self {
        Self {
            catalog_path,
            catalog: Catalog::with_policy(policy),
            audit: None,
        }
    }

    /// Open the catalog described by paths and settings, loading it if present
    ///
    /// `catalog_override` replaces the default catalog file location.
    pub fn open(
        paths: &CatalogPaths,
        settings: &Settings,
        catalog_override: Option<PathBuf>,
    ) -> Result<Self, CatalogError> {
        paths.ensure_directories()?;

        let catalog_path = catalog_override.unwrap_or_else(|| paths.catalog_file());
        let mut storage = Self::new(catalog_path, settings.loan_policy()?);
        if settings.audit_enabled {
            storage = storage.with_audit(AuditLogger::new(paths.audit_log()));
        }
        storage.load()?;
        Ok(storage)
    }

    /// Attach an audit logger
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Load the catalog from disk
    ///
    /// A missing file leaves an empty catalog and returns `Ok(false)`. Any
    /// other failure, including a corrupt file, is an error.
    pub fn load(&mut self) -> Result<bool, CatalogError> {
        let policy = self.catalog.policy();

        match file_io::read_optional(&self.catalog_path)? {
            None => {
                self.catalog = Catalog::with_policy(policy);
                Ok(false)
            }
            Some(bytes) => {
                let mut catalog = decode(&bytes).map_err(|e| {
                    CatalogError::Storage(format!("{}: {}", self.catalog_path.display(), e))
                })?;
                catalog.set_policy(policy);
                self.catalog = catalog;
                Ok(true)
            }
        }
    }

    /// Write the whole catalog to disk
    pub fn save(&self) -> Result<(), CatalogError> {
        write_atomic(&self.catalog_path, &encode(&self.catalog)?)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Swap in a whole catalog, keeping the configured loan policy
    pub fn replace_catalog(&mut self, mut catalog: Catalog) {
        catalog.set_policy(self.catalog.policy());
        self.catalog = catalog;
    }

    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn record(&self, entry: AuditEntry) -> Result<(), CatalogError> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    /// Record a creation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), CatalogError> {
        self.record(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), CatalogError> {
        self.record(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a deletion in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), CatalogError> {
        self.record(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
