//! Error types for map operations.

use thiserror::Error;

/// Structured error types for map operations.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// No entry exists at the requested key or path.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// A value had a different type than the operation required.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },

    /// The path is not a valid target for the operation. The empty path is
    /// never a valid assignment target.
    #[error("invalid path: {path}")]
    InvalidPath { path: String },
}

impl MapError {
    /// Check if this error indicates a missing key or path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MapError::NotFound { .. })
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_error(&self) -> bool {
        matches!(self, MapError::TypeMismatch { .. })
    }

    /// Check if this error is path-related.
    pub fn is_path_error(&self) -> bool {
        matches!(self, MapError::InvalidPath { .. })
    }

    /// Get the key if this is a lookup error.
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::NotFound { key } => Some(key),
            _ => None,
        }
    }
}
