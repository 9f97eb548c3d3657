//! Configuration module for the library catalog
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence (loan periods, audit logging)

pub mod paths;
pub mod settings;

pub use paths::CatalogPaths;
pub use settings::Settings;
