use crate::handle::DatabaseKind;
use std::string::FromUtf8Error;
use thiserror::Error;

/// All errors coming from the database metadata layer.
#[derive(Debug, Error)]
pub enum DbError {
    /// Any SQL driver error (connectivity, permissions, protocol).
    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    /// The requested table does not exist in the schema.
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// UTF-8 decoding failed on some byte data.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// The adapter was handed a database handle for a different dialect.
    #[error("Handle mismatch: adapter expects {expected:?}, got {actual:?}")]
    HandleMismatch {
        expected: DatabaseKind,
        actual: DatabaseKind,
    },
}

/// Errors happening during adapter or connection setup.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// No adapter is registered for the requested dialect.
    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    /// The driver failed to build the connection pool.
    #[error("Connection failed: {0}")]
    Connect(#[from] sqlx::Error),
}
