//! Error handling - maps failures to the API's JSON error bodies.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::RepoError;
use blog_shared::{FieldError, MessageResponse, ValidationErrorResponse};
use std::fmt;
use validator::ValidationErrors;

use crate::validation;

/// Application-level error type.
///
/// Messages are the fixed public ones; driver detail is logged when the error
/// is created and never reaches the client.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Validation(Vec<FieldError>),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            AppError::NotFound(msg) | AppError::Internal(msg) => {
                response.json(MessageResponse::new(msg.as_str()))
            }
            AppError::Validation(errors) => response.json(ValidationErrorResponse {
                message: errors.clone(),
            }),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound(err.to_string()),
            RepoError::OperationFailed { op, detail } => {
                tracing::error!(operation = ?op, error = %detail, "Database operation failed");
                AppError::Internal(op.failure_message().to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(validation::field_errors(&errors))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
