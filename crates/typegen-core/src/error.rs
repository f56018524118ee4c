use connectors::error::{AdapterError, DbError};
use thiserror::Error;

/// Errors from the type-conversion step.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A native type with no mapping, in strict mode.
    #[error("Unknown native type '{native_type}' for column {column}")]
    UnknownType { column: String, native_type: String },
}

/// Top-level errors for the generation core. Collaborator failures pass
/// through unchanged.
#[derive(Debug, Error)]
pub enum TypegenError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Convert(#[from] ConvertError),
}
