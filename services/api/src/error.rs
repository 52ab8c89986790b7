//! Custom error types for the API service

use auth::AuthError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use thiserror::Error;
use tracing::error;

use crate::models::{Meta, ResponseFailed};

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// Unknown username or wrong password
    #[error("Invalid email or password!")]
    InvalidEmailOrPassword,

    /// Bearer token failed verification
    #[error("Invalid token!")]
    InvalidToken,

    /// No bearer credential on a protected route
    #[error("Not Authorized!")]
    NotAuthorized,

    /// Target resource does not exist
    #[error("Not Found!")]
    NotFound,

    /// Photo referenced by a new comment does not exist
    #[error("Photo not found!")]
    PhotoNotFound,

    /// Caller does not own the target resource
    #[error("Forbidden Access!")]
    ForbiddenAccess,

    /// Request body is malformed or fails a field rule
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidEmailOrPassword | ApiError::InvalidToken | ApiError::NotAuthorized => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::ForbiddenAccess => StatusCode::FORBIDDEN,
            ApiError::NotFound | ApiError::PhotoNotFound => StatusCode::NOT_FOUND,
            ApiError::Database(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken => ApiError::InvalidToken,
            AuthError::ForbiddenAccess => ApiError::ForbiddenAccess,
            AuthError::Hashing(msg) | AuthError::Configuration(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            ApiError::Database(_) | ApiError::Internal(_) => {
                error!("Request failed: {}", self);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ResponseFailed {
            meta: Meta::new(status),
            error: message,
        });

        (status, body).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
