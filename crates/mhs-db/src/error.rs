//! Database and signup error types for mhs-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Outcome of a failed signup or unregister attempt.
///
/// The first four variants are expected, user-facing conditions with stable
/// messages; the HTTP boundary maps them to 404/400 responses. `Database`
/// wraps unexpected storage failures, which surface as 500.
#[derive(Debug, Error)]
pub enum SignupError {
    /// The referenced activity does not exist.
    #[error("Activity not found")]
    ActivityNotFound,

    /// The student is already enrolled in this activity.
    #[error("Student is already signed up")]
    AlreadyEnrolled,

    /// The activity is at capacity.
    #[error("Activity is full")]
    ActivityFull,

    /// Unregister attempted for a student who is not enrolled.
    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    /// Unexpected storage failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<libsql::Error> for SignupError {
    fn from(error: libsql::Error) -> Self {
        Self::Database(DatabaseError::LibSql(error))
    }
}
