//! YAML Export functionality
//!
//! Exports the complete catalog to YAML format for human-readable backup.

use std::io::Write;

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::export::json::FullExport;

/// Export the full catalog to YAML format
pub fn export_full_yaml<W: Write>(catalog: &Catalog, writer: &mut W) -> CatalogResult<()> {
    let export = FullExport::from_catalog(catalog);

    let header = format!(
        "# Library Catalog Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| CatalogError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| CatalogError::Export(e.to_string()))?;

    Ok(())
}

/// Import from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> CatalogResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| CatalogError::Import(e.to_string()))?;

    export.validate().map_err(CatalogError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_export_and_import() {
        let mut catalog = Catalog::new();
        catalog.add_book("Dune", "Frank Herbert", "PS3558.E63");
        catalog.add_book_copy("PS3558.E63");
        catalog.add_borrower("Ada", "Lovelace", "ada@example.com", "555-0100");
        catalog.checkout("PS3558.E63", 1, "ada@example.com");

        let mut output = Vec::new();
        export_full_yaml(&catalog, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Library Catalog Export"));
        assert!(yaml.contains("call_number: PS3558.E63"));

        let imported = import_from_yaml(&yaml).unwrap();
        assert_eq!(imported.into_catalog().unwrap(), catalog);
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(import_from_yaml("books: [unclosed").is_err());
    }
}
