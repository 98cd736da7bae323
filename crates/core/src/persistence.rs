//! Saving and loading the attribute store
//!
//! The store is written as pretty JSON wrapped in a [`StoreFile`] carrying a
//! schema version. A bare serialized store is accepted on load as well.

use crate::error::{DashError, DashResult};
use crate::store::AttributeStore;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current store file schema version
pub const SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Store File Wrapper
// ============================================================================

/// Wrapper for store files that includes version information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreFile {
    /// Schema version for migration purposes
    pub schema_version: u32,

    /// The store data
    pub store: AttributeStore,
}

impl StoreFile {
    /// Wrap a store at the current schema version
    pub fn new(store: AttributeStore) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            store,
        }
    }

    /// Check whether the file was written by a newer version
    pub fn is_from_future(&self) -> bool {
        self.schema_version > SCHEMA_VERSION
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a store to a file, creating parent directories as needed
pub fn save_store(store: &AttributeStore, path: impl AsRef<Path>) -> DashResult<()> {
    let path = path.as_ref();
    let json = save_store_to_string(store).map_err(|e| DashError::FileWrite {
        path: path.to_path_buf(),
        message: format!("Failed to serialize store: {}", e),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| DashError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| DashError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "store saved");
    Ok(())
}

/// Save a store to a JSON string
pub fn save_store_to_string(store: &AttributeStore) -> DashResult<String> {
    let file = StoreFile::new(store.clone());
    Ok(serde_json::to_string_pretty(&file)?)
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a store from a file
pub fn load_store(path: impl AsRef<Path>) -> DashResult<AttributeStore> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DashError::StoreNotFound(path.to_path_buf()));
    }

    let json = std::fs::read_to_string(path).map_err(|e| DashError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    load_store_from_string(&json).map_err(|e| match e {
        DashError::JsonSerialization(je) => DashError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid store file format: {}", je),
        },
        other => other,
    })
}

/// Load a store from a JSON string
pub fn load_store_from_string(json: &str) -> DashResult<AttributeStore> {
    if let Ok(file) = serde_json::from_str::<StoreFile>(json) {
        if file.is_from_future() {
            return Err(DashError::InvalidStoreFormat(format!(
                "schema version {} is newer than supported version {}",
                file.schema_version, SCHEMA_VERSION
            )));
        }
        return Ok(file.store);
    }

    // Raw store without the version wrapper
    let store: AttributeStore = serde_json::from_str(json)?;
    Ok(store)
}

/// Load the store at `path`, or fall back to the sample catalogue when the
/// file does not exist yet
pub fn load_or_sample(path: impl AsRef<Path>) -> DashResult<AttributeStore> {
    match load_store(path) {
        Err(DashError::StoreNotFound(path)) => {
            tracing::info!(path = %path.display(), "no store file yet, using sample catalogue");
            Ok(AttributeStore::sample())
        }
        other => other,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::Attribute;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_store() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("store.json");

        let mut store = AttributeStore::new();
        store.add_attribute(Attribute::new("Material").with_value("Cotton"));

        save_store(&store, &path).unwrap();
        assert!(path.exists());

        let loaded = load_store(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_store("/nonexistent/path/store.json");
        match result {
            Err(DashError::StoreNotFound(path)) => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("Expected StoreNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_or_sample_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let store = load_or_sample(temp_dir.path().join("missing.json")).unwrap();
        let names: Vec<&str> = store.attributes().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Color", "Size"]);
    }

    #[test]
    fn test_load_raw_store() {
        let store = AttributeStore::sample();
        let raw = serde_json::to_string(&store).unwrap();
        let loaded = load_store_from_string(&raw).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_rejects_future_schema() {
        let json = r#"{"schema_version": 99, "store": {"attributes": []}}"#;
        let err = load_store_from_string(json).unwrap_err();
        assert!(matches!(err, DashError::InvalidStoreFormat(_)));
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, DashError::FileRead { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
