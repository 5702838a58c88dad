//! Error handling for the IrriSmart API
//!
//! The analytics pipeline itself never fails: unknown plot ids fall back to
//! the default plot and day counts are coerced. Errors only arise at the
//! edges (unknown routes and configuration).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message: format!("{} not found", resource),
                    field: None,
                },
            ),
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: format!("Configuration error: {}", msg),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let (field, message) = first_field_error(&errors, "")
            .unwrap_or_else(|| ("unknown".to_string(), errors.to_string()));
        AppError::Validation { field, message }
    }
}

/// Dotted path and message of the first failing field, descending into
/// nested structs
fn first_field_error(errors: &ValidationErrors, prefix: &str) -> Option<(String, String)> {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(failures) => {
                let message = failures
                    .first()
                    .map(|failure| {
                        failure
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| format!("{} failed {} check", path, failure.code))
                    })
                    .unwrap_or_else(|| format!("{} is invalid", path));
                return Some((path, message));
            }
            ValidationErrorsKind::Struct(inner) => {
                if let Some(found) = first_field_error(inner, &path) {
                    return Some(found);
                }
            }
            ValidationErrorsKind::List(items) => {
                for inner in items.values() {
                    if let Some(found) = first_field_error(inner, &path) {
                        return Some(found);
                    }
                }
            }
        }
    }
    None
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
