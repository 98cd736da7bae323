//! Error types for Shopdash
//!
//! Hard failures raised by the attribute store, persistence and configuration
//! layers. Validation problems a user can fix are NOT errors here: mutations
//! report those as [`UserError`](crate::types::UserError) values inside a
//! successful [`MutationResult`](crate::types::MutationResult).

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Shopdash
#[derive(Debug, Error)]
pub enum DashError {
    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Attribute not found
    #[error("Attribute not found: {0}")]
    AttributeNotFound(String),

    /// Attribute value not found
    #[error("Attribute value not found: {0}")]
    AttributeValueNotFound(String),

    /// Store file not found
    #[error("Store file not found at path: {0}")]
    StoreNotFound(PathBuf),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// Invalid store file format
    #[error("Invalid store file format: {0}")]
    InvalidStoreFormat(String),

    /// Invalid locale catalog
    #[error("Invalid locale catalog '{path}': {message}")]
    InvalidCatalog { path: PathBuf, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration, including TOML that does not parse
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DashError {
    /// Create an attribute-not-found error
    pub fn attribute_not_found(id: impl ToString) -> Self {
        DashError::AttributeNotFound(id.to_string())
    }

    /// Create an attribute-value-not-found error
    pub fn value_not_found(id: impl ToString) -> Self {
        DashError::AttributeValueNotFound(id.to_string())
    }

    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        DashError::InvalidConfig(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DashError::Internal(msg.into())
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DashError::AttributeNotFound(_)
                | DashError::AttributeValueNotFound(_)
                | DashError::StoreNotFound(_)
        )
    }
}

/// Result type alias using DashError
pub type DashResult<T> = Result<T, DashError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_errors() {
        let err = DashError::attribute_not_found("color");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Attribute not found: color");

        let err = DashError::value_not_found("red");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Attribute value not found: red");
    }

    #[test]
    fn test_file_errors_are_not_not_found() {
        let err = DashError::FileRead {
            path: PathBuf::from("store.json"),
            message: "denied".to_string(),
        };
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Failed to read file 'store.json': denied");
        assert!(DashError::StoreNotFound(PathBuf::from("store.json")).is_not_found());
    }

    #[test]
    fn test_invalid_config() {
        let err = DashError::invalid_config("width must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: width must be positive"
        );
    }
}
