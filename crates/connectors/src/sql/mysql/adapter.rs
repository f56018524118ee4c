use crate::{
    error::DbError,
    handle::{DatabaseKind, DbHandle},
    sql::base::adapter::SchemaAdapter,
};
use async_trait::async_trait;
use model::{column::RawColumn, table::TableRef};
use sqlx::{MySql, Pool, Row, mysql::MySqlRow};
use tracing::debug;

const QUERY_TABLE_COLUMNS_SQL: &str = include_str!("sql/table_columns.sql");
const QUERY_LIST_TABLES_SQL: &str = include_str!("sql/list_tables.sql");

#[derive(Debug)]
pub struct MySqlAdapter;

impl MySqlAdapter {
    fn pool<'a>(&self, db: &'a DbHandle) -> Result<&'a Pool<MySql>, DbError> {
        match db {
            DbHandle::MySql(pool) => Ok(pool),
            other => Err(DbError::HandleMismatch {
                expected: DatabaseKind::MySql,
                actual: other.kind(),
            }),
        }
    }

    // information_schema text columns come back as VARBINARY through the
    // MySQL protocol, so decode them from bytes.
    fn get_text(row: &MySqlRow, column: &str) -> Result<String, DbError> {
        let raw: Vec<u8> = row.try_get(column)?;
        Ok(String::from_utf8(raw)?)
    }
}

#[async_trait]
impl SchemaAdapter for MySqlAdapter {
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
                    name: Self::get_text(row, "column_name")?,
                    native_type: Self::get_text(row, "data_type")?,
                    is_nullable: Self::get_text(row, "is_nullable")? == "YES",
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

        // Empty schema list falls back to the connection's default database
        // via the query's COALESCE.
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
                    name: Self::get_text(row, "table_name")?,
                    schema: Self::get_text(row, "table_schema")?,
                });
            }
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_foreign_handle() {
        let handle = DbHandle::connect_lazy("postgres", "postgres://localhost/db").unwrap();
        let err = MySqlAdapter
            .get_all_columns(&handle, &TableRef::new("users", ""))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::HandleMismatch {
                expected: DatabaseKind::MySql,
                actual: DatabaseKind::Postgres,
            }
        ));
    }
}
