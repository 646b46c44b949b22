//! Response types for the record store API.
//!
//! This module defines the success bodies, the error response structure
//! and the mapping from [`RecordError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::models::EmployeeRecord;
use crate::query::SearchField;

/// A record as shown in a listing, with its salary pre-formatted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeView {
    /// The stored record.
    #[serde(flatten)]
    pub record: EmployeeRecord,
    /// Display form of the salary, e.g. `"120,000 PKR"` or `"-"`.
    pub salary_display: String,
}

impl From<&EmployeeRecord> for EmployeeView {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            salary_display: record.salary_display(),
            record: record.clone(),
        }
    }
}

/// Body of `GET /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    /// Count label for the matched records, e.g. `"2 records"`.
    pub summary: String,
    /// Number of records in the store.
    pub total: usize,
    /// The field that was searched.
    pub field: SearchField,
    /// Matching records in store order.
    pub records: Vec<EmployeeView>,
}

/// Body returned after a successful create, update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationResponse {
    /// The status message, e.g. `"Record added"`.
    pub message: String,
    /// The record as stored (or as it was before deletion).
    pub record: EmployeeRecord,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response pointing at the offending field.
    pub fn validation_error(field: &str, message: impl Into<String>) -> Self {
        Self::with_details(
            "VALIDATION_ERROR",
            message,
            format!("Check the '{}' field and try again", field),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the response for a delete whose confirmation was not given.
    pub fn delete_not_confirmed(id: &str) -> Self {
        Self::with_details(
            "DELETE_NOT_CONFIRMED",
            format!("Delete of '{}' was not confirmed", id),
            "Repeat the request with confirm=true to delete the record",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RecordError> for ApiErrorResponse {
    fn from(error: RecordError) -> Self {
        let message = error.to_string();
        match error {
            RecordError::Validation { field, .. } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(&field, message),
            ),
            RecordError::NotFound { id } => ApiErrorResponse::new(
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "NOT_FOUND",
                    message,
                    format!("No employee record has id '{}'", id),
                ),
            ),
            RecordError::Persistence { .. } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "PERSISTENCE_ERROR",
                    "Failed to persist employee records",
                    message,
                ),
            ),
            RecordError::ConfigNotFound { .. } | RecordError::ConfigParseError { .. } => {
                ApiErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                )
            }
        }
    }
}
