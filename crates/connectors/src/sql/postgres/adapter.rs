use crate::{
    error::DbError,
    handle::{DatabaseKind, DbHandle},
    sql::base::adapter::SchemaAdapter,
};
use async_trait::async_trait;
use model::{column::RawColumn, table::TableRef};
use sqlx::{Pool, Postgres, Row};
use tracing::debug;

const QUERY_TABLE_COLUMNS_SQL: &str = include_str!("sql/table_columns.sql");
const QUERY_LIST_TABLES_SQL: &str = include_str!("sql/list_tables.sql");

#[derive(Debug)]
pub struct PgAdapter;

impl PgAdapter {
    fn pool<'a>(&self, db: &'a DbHandle) -> Result<&'a Pool<Postgres>, DbError> {
        match db {
            DbHandle::Postgres(pool) => Ok(pool),
            other => Err(DbError::HandleMismatch {
                expected: DatabaseKind::Postgres,
                actual: other.kind(),
            }),
        }
    }
}

#[async_trait]
impl SchemaAdapter for PgAdapter {
    async fn get_all_columns(
        &self,
        db: &DbHandle,
        table: &TableRef,
    ) -> Result<Vec<RawColumn>, DbError> {
        let pool = self.pool(db)?;
        let rows = sqlx::query(QUERY_TABLE_COLUMNS_SQL)
            .bind(&table.name)
            .bind(&table.schema)
            .fetch_all(pool)
            .await?;

        if rows.is_empty() {
            return Err(DbError::TableNotFound(table.qualified_name()));
        }

        debug!("fetched {} columns for {}", rows.len(), table);
        rows.iter()
            .map(|row| {
                Ok(RawColumn {
                    name: row.try_get("column_name")?,
                    native_type: row.try_get("data_type")?,
                    is_nullable: row.try_get::<String, _>("is_nullable")? == "YES",
                })
            })
            .collect()
    }

    async fn get_all_tables(
        &self,
        db: &DbHandle,
        schemas: &[String],
    ) -> Result<Vec<TableRef>, DbError> {
        let pool = self.pool(db)?;

        // Empty schema list falls back to "public" via the query's COALESCE.
        let default_schema = [String::new()];
        let schemas = if schemas.is_empty() {
            &default_schema[..]
        } else {
            schemas
        };

        let mut tables = Vec::new();
        for schema in schemas {
            let rows = sqlx::query(QUERY_LIST_TABLES_SQL)
                .bind(schema)
                .fetch_all(pool)
                .await?;
            for row in &rows {
                tables.push(TableRef {
                    name: row.try_get("table_name")?,
                    schema: row.try_get("table_schema")?,
                });
            }
        }
        Ok(tables)
    }
}
