//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CatalogError;

/// Read a whole file, returning `None` if it does not exist
///
/// Any failure other than "not found" is an error.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, CatalogError> {
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(CatalogError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| CatalogError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(Some(bytes))
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, CatalogError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    match read_optional(path)? {
        None => Ok(T::default()),
        Some(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
            CatalogError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), CatalogError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CatalogError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in same directory so the rename stays on one filesystem
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = std::path::PathBuf::from(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| CatalogError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| CatalogError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| CatalogError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CatalogError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CatalogError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), CatalogError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| CatalogError::Storage(format!("Failed to serialize data: {}", e)))?;
    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: TestData = read_json(&path).unwrap();
        assert_eq!(data, TestData::default());
        assert!(read_optional(&path).unwrap().is_none());
    }

    #[test]
    fn test_read_directory_is_error() {
        let temp_dir = TempDir::new().unwrap();
        // Opening succeeds on some platforms but reading a directory never does
        assert!(read_optional(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        assert!(path.exists());

        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let result: Result<TestData, _> = read_json(&path);
        assert!(matches!(result, Err(CatalogError::Storage(_))));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_atomic(&path, b"{}").unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_atomic(&path, b"[]").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"[]");
    }
}
