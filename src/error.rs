//! Error types for the employee record store.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a store operation can report.

use thiserror::Error;

/// The main error type for the employee record store.
///
/// All operations in the crate return this error type, so callers can
/// handle validation, lookup and persistence failures in one place.
///
/// # Example
///
/// ```
/// use employee_records::error::RecordError;
///
/// let error = RecordError::NotFound {
///     id: "id_42".to_string(),
/// };
/// assert_eq!(error.to_string(), "Record not found: id_42");
/// ```
#[derive(Debug, Error)]
pub enum RecordError {
    /// A required field was empty or a field could not be normalized.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No record with the given id exists in the store.
    #[error("Record not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// Reading from or writing to the persistence boundary failed.
    #[error("Persistence failure for key '{key}': {message}")]
    Persistence {
        /// The storage key involved.
        key: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl RecordError {
    /// Builds a validation error for a required field left empty.
    pub fn required(field: &str) -> Self {
        RecordError::Validation {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }

    /// Builds a persistence error for `key` from any displayable cause.
    pub fn persistence(key: &str, cause: impl std::fmt::Display) -> Self {
        RecordError::Persistence {
            key: key.to_string(),
            message: cause.to_string(),
        }
    }
}

/// A type alias for Results that return RecordError.
pub type RecordResult<T> = Result<T, RecordError>;
