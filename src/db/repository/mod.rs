//! Repository Module
//!
//! CRUD operations against the SQLite `bookings` table. Repositories are
//! plain async functions over a shared [`sqlx::SqlitePool`]; each statement
//! acquires a connection from the pool for its own scope.

pub mod booking;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            // Unique index violation on (date, time) — the slot is taken
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                RepoError::Duplicate("Time slot already booked".into())
            }
            other => RepoError::Database(other.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
