//! Settings display and update

use clap::Args;

use crate::config::{CatalogPaths, Settings};
use crate::error::CatalogResult;
use crate::storage::Storage;

/// Options for the config command; with none given it only prints
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Days from checkout to due date
    #[arg(long)]
    pub loan_days: Option<u32>,

    /// Days a renewal adds
    #[arg(long)]
    pub renewal_days: Option<u32>,

    /// Turn the audit log on or off
    #[arg(long)]
    pub audit: Option<bool>,

    /// Date format for tables (strftime)
    #[arg(long)]
    pub date_format: Option<String>,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.loan_days.is_none()
            && self.renewal_days.is_none()
            && self.audit.is_none()
            && self.date_format.is_none()
    }
}

/// Show paths and settings, saving any changes first
pub fn handle_config_command(
    paths: &CatalogPaths,
    storage: &Storage,
    settings: &Settings,
    args: ConfigArgs,
) -> CatalogResult<()> {
    let mut settings = settings.clone();

    if !args.is_empty() {
        if let Some(days) = args.loan_days {
            settings.loan_days = days;
        }
        if let Some(days) = args.renewal_days {
            settings.renewal_days = days;
        }
        if let Some(enabled) = args.audit {
            settings.audit_enabled = enabled;
        }
        if let Some(format) = args.date_format {
            settings.date_format = format;
        }
        settings.validate()?;
        settings.save(paths)?;
        println!("Settings saved to: {}", paths.settings_file().display());
        println!();
    }

    println!("Library Catalog Configuration");
    println!("=============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Catalog file:   {}", storage.catalog_path().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Loan days:     {}", settings.loan_days);
    println!("  Renewal days:  {}", settings.renewal_days);
    println!("  Audit enabled: {}", settings.audit_enabled);
    println!("  Date format:   {}", settings.date_format);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CatalogPaths, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = CatalogPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths, &Settings::default(), None).unwrap();
        (temp_dir, paths, storage)
    }

    #[test]
    fn test_config_updates_are_saved() {
        let (_temp_dir, paths, storage) = setup();
        let args = ConfigArgs {
            loan_days: Some(14),
            audit: Some(false),
            ..ConfigArgs::default()
        };

        handle_config_command(&paths, &storage, &Settings::default(), args).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.loan_days, 14);
        assert_eq!(reloaded.renewal_days, 28);
        assert!(!reloaded.audit_enabled);
    }

    #[test]
    fn test_zero_loan_days_rejected() {
        let (_temp_dir, paths, storage) = setup();
        let args = ConfigArgs {
            renewal_days: Some(0),
            ..ConfigArgs::default()
        };

        let result = handle_config_command(&paths, &storage, &Settings::default(), args);
        assert!(matches!(result, Err(CatalogError::Config(_))));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_show_only_writes_nothing() {
        let (_temp_dir, paths, storage) = setup();
        handle_config_command(&paths, &storage, &Settings::default(), ConfigArgs::default())
            .unwrap();
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let (_temp_dir, paths, storage) = setup();
        let args = ConfigArgs {
            date_format: Some("%Q".to_string()),
            ..ConfigArgs::default()
        };

        let result = handle_config_command(&paths, &storage, &Settings::default(), args);
        assert!(matches!(result, Err(CatalogError::Config(_))));
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_overlong_loan_days_rejected() {
        let (_temp_dir, paths, storage) = setup();
        let args = ConfigArgs {
            loan_days: Some(u32::MAX),
            ..ConfigArgs::default()
        };

        let result = handle_config_command(&paths, &storage, &Settings::default(), args);
        assert!(matches!(result, Err(CatalogError::Config(_))));
        assert!(!paths.settings_file().exists());
    }
}
