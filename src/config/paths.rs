//! Path management for the library catalog
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `LIBRARY_CATALOG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/library-catalog` or `~/.config/library-catalog`
//! 3. Windows: `%APPDATA%\library-catalog`

use std::path::PathBuf;

use crate::error::CatalogError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "LIBRARY_CATALOG_DATA_DIR";

/// Manages all paths used by the catalog
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    /// Base directory for all catalog data
    base_dir: PathBuf,
}

impl CatalogPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CatalogError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CatalogPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/library-catalog/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the default path to catalog.json
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir().join("catalog.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), CatalogError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CatalogError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CatalogError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("library-catalog"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| CatalogError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("library-catalog"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, CatalogError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| CatalogError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("library-catalog"))
}
