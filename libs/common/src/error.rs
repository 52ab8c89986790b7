//! Custom error types for the common library
//!
//! This module defines the storage error type shared by every repository
//! implementation in the workspace.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// A uniqueness or referential constraint was violated
    #[error("Database constraint violated: {0}")]
    Constraint(String),
}

impl From<SqlxError> for DatabaseError {
    fn from(err: SqlxError) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() || db_err.is_foreign_key_violation() {
                return DatabaseError::Constraint(
                    db_err.constraint().unwrap_or_default().to_string(),
                );
            }
        }

        DatabaseError::Query(err)
    }
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError as SqlxDatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;

    #[derive(Debug, Error)]
    #[error("{message}")]
    struct FakeDbError {
        message: String,
        violation: Violation,
        constraint: Option<&'static str>,
    }

    #[derive(Debug, Clone, Copy)]
    enum Violation {
        Unique,
        ForeignKey,
        Other,
    }

    impl SqlxDatabaseError for FakeDbError {
        fn message(&self) -> &str {
            &self.message
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            match self.violation {
                Violation::Unique => Some(Cow::Borrowed("23505")),
                Violation::ForeignKey => Some(Cow::Borrowed("23503")),
                Violation::Other => None,
            }
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            match self.violation {
                Violation::Unique => ErrorKind::UniqueViolation,
                Violation::ForeignKey => ErrorKind::ForeignKeyViolation,
                Violation::Other => ErrorKind::Other,
            }
        }
    }

    fn db_error(violation: Violation, constraint: Option<&'static str>) -> SqlxError {
        SqlxError::Database(Box::new(FakeDbError {
            message: "violation".to_string(),
            violation,
            constraint,
        }))
    }

    #[test]
    fn test_unique_violation_maps_to_constraint() {
        let err = DatabaseError::from(db_error(
            Violation::Unique,
            Some("users_username_key"),
        ));

        match err {
            DatabaseError::Constraint(name) => assert_eq!(name, "users_username_key"),
            other => panic!("expected Constraint, got {other:?}"),
        }
    }

    #[test]
    fn test_foreign_key_violation_maps_to_constraint() {
        let err = DatabaseError::from(db_error(
            Violation::ForeignKey,
            Some("comments_photo_id_fkey"),
        ));

        assert!(matches!(err, DatabaseError::Constraint(name) if name == "comments_photo_id_fkey"));
    }

    #[test]
    fn test_other_errors_stay_query() {
        assert!(matches!(
            DatabaseError::from(db_error(Violation::Other, None)),
            DatabaseError::Query(_)
        ));
        assert!(matches!(
            DatabaseError::from(SqlxError::RowNotFound),
            DatabaseError::Query(_)
        ));
    }
}
