use connectors::error::{AdapterError, DbError};
use thiserror::Error;
use typegen_config::error::ConfigError;
use typegen_core::error::TypegenError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Adapter(#[from] AdapterError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Typegen(#[from] TypegenError),
}
