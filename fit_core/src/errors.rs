//! # Error Types
//!
//! Structured error types for fit_core. A renderer receiving one of these
//! should show a notice to the user and leave any previous output untouched.
//!
//! ## Example
//!
//! ```rust
//! use fit_core::errors::{FitError, FitResult};
//!
//! fn validate_weight(weight_kg: f64) -> FitResult<()> {
//!     if weight_kg <= 0.0 {
//!         return Err(FitError::InvalidInput {
//!             field: "weight_kg".to_string(),
//!             value: weight_kg.to_string(),
//!             reason: "Weight must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for fit_core operations
pub type FitResult<T> = Result<T, FitError>;

/// Structured error type for metrics and preference operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum FitError {
    /// An input value is invalid (non-numeric, out of range, unknown option)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing or blank
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Preferences file is locked by another process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl FitError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        FitError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        FitError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        FitError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        FitError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        FitError::SerializationError {
            reason: reason.into(),
        }
    }

    /// True for errors caused by user input rather than storage.
    ///
    /// No metrics are produced when a validation error is returned.
    pub fn is_validation(&self) -> bool {
        matches!(self, FitError::InvalidInput { .. } | FitError::MissingField { .. })
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, FitError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            FitError::InvalidInput { .. } => "INVALID_INPUT",
            FitError::MissingField { .. } => "MISSING_FIELD",
            FitError::FileError { .. } => "FILE_ERROR",
            FitError::FileLocked { .. } => "FILE_LOCKED",
            FitError::SerializationError { .. } => "SERIALIZATION_ERROR",
            FitError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}
