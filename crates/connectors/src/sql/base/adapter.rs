use crate::{error::DbError, handle::DbHandle};
use async_trait::async_trait;
use model::{column::RawColumn, table::TableRef};

/// Dialect-specific schema introspection.
///
/// Adapters are stateless; the connection pool travels in the borrowed
/// [`DbHandle`]. Column ordering follows the table's ordinal positions and
/// must be preserved by callers.
#[async_trait]
pub trait SchemaAdapter: Send + Sync + std::fmt::Debug {
    /// Lists every column of `table`, in ordinal order.
    ///
    /// Fails with [`DbError::TableNotFound`] when the table has no columns
    /// in the catalog, which is how a missing table presents itself.
    async fn get_all_columns(
        &self,
        db: &DbHandle,
        table: &TableRef,
    ) -> Result<Vec<RawColumn>, DbError>;

    /// Lists base tables visible in the given schemas. An empty slice means
    /// the dialect's default schema.
    async fn get_all_tables(
        &self,
        db: &DbHandle,
        schemas: &[String],
    ) -> Result<Vec<TableRef>, DbError>;
}
