use crate::{
    error::AdapterError,
    handle::DatabaseKind,
    sql::{base::adapter::SchemaAdapter, mysql::adapter::MySqlAdapter, postgres::adapter::PgAdapter},
};

/// Resolves a schema adapter from a dialect string.
pub trait AdapterFactory: Send + Sync {
    fn build_adapter(&self, dialect: &str) -> Result<Box<dyn SchemaAdapter>, AdapterError>;
}

/// The built-in dialect registry: a plain lookup from dialect identifier to
/// adapter implementation.
pub struct DialectRegistry;

impl AdapterFactory for DialectRegistry {
    fn build_adapter(&self, dialect: &str) -> Result<Box<dyn SchemaAdapter>, AdapterError> {
        match dialect.parse::<DatabaseKind>()? {
            DatabaseKind::MySql => Ok(Box::new(MySqlAdapter)),
            DatabaseKind::Postgres => Ok(Box::new(PgAdapter)),
        }
    }
}
