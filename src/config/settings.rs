//! User settings for the library catalog
//!
//! Manages loan periods, audit logging, and display preferences.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::CatalogPaths;
use crate::catalog::{LoanPolicy, DEFAULT_LOAN_DAYS};
use crate::error::{CatalogError, CatalogResult};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Days from checkout to due date
    #[serde(default = "default_loan_days")]
    pub loan_days: u32,

    /// Days a renewal adds to the due date
    #[serde(default = "default_loan_days")]
    pub renewal_days: u32,

    /// Whether catalog changes are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Date format for tables (strftime format); text reports always use ISO dates
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_loan_days() -> u32 {
    DEFAULT_LOAN_DAYS
}

fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            loan_days: default_loan_days(),
            renewal_days: default_loan_days(),
            audit_enabled: true,
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist them.
    pub fn load_or_create(paths: &CatalogPaths) -> CatalogResult<Self> {
        let settings: Settings = read_json(paths.settings_file())
            .map_err(|e| CatalogError::Config(format!("Failed to load settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CatalogPaths) -> CatalogResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// Check the loan periods and the date format
    pub fn validate(&self) -> CatalogResult<()> {
        self.loan_policy()?;
        validate_date_format(&self.date_format)
    }

    /// The loan policy these settings describe
    pub fn loan_policy(&self) -> CatalogResult<LoanPolicy> {
        LoanPolicy::new(self.loan_days, self.renewal_days)
            .map_err(|e| CatalogError::Config(e.to_string()))
    }
}

/// Reject strftime strings that do not parse or cannot format a plain date
fn validate_date_format(format: &str) -> CatalogResult<()> {
    let invalid = || CatalogError::Config(format!("Invalid date format: '{}'", format));

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }
    let sample = NaiveDate::MIN;
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).map_err(|_| invalid())
}
