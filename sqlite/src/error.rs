//! Error types for SQLite people storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the SQLite backend.
#[derive(Debug, Error)]
pub enum SqliteError {
    /// The database file could not be opened.
    #[error("failed to open database '{}': {source}", path.display())]
    OpenError {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite statement failure, including constraint violations.
    #[error("database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
}

/// Convenience alias for results with [`SqliteError`].
pub type Result<T> = std::result::Result<T, SqliteError>;
