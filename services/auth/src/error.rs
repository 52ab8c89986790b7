//! Error types for the authentication core

use thiserror::Error;

/// Errors produced by credential hashing, token handling and ownership checks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Token is malformed, signed with another algorithm or key, or expired
    #[error("Invalid token!")]
    InvalidToken,

    /// Caller does not own the resource it tries to mutate
    #[error("Forbidden Access!")]
    ForbiddenAccess,

    /// The password hashing library failed
    #[error("Password hashing error: {0}")]
    Hashing(String),

    /// Token signing could not be set up or performed
    #[error("Token configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with AuthError
pub type AuthResult<T> = Result<T, AuthError>;
