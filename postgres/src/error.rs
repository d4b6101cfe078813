//! Error types for Postgres people storage.

use thiserror::Error;

/// Errors that can occur in the Postgres backend.
#[derive(Debug, Error)]
pub enum PostgresError {
    /// The server could not be reached or rejected the login.
    #[error("failed to connect to {host}:{port}/{dbname}: {source}")]
    ConnectError {
        host: String,
        port: u16,
        dbname: String,
        #[source]
        source: postgres::Error,
    },

    /// Statement failure, including constraint violations.
    #[error("database error: {0}")]
    DatabaseError(#[from] postgres::Error),
}

/// Convenience alias for results with [`PostgresError`].
pub type Result<T> = std::result::Result<T, PostgresError>;
