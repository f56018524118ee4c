use crate::{
    columns::ColumnPipeline,
    error::TypegenError,
    tables::{get_tables_for_database, stringify_table},
};
use connectors::{
    factory::{AdapterFactory, DialectRegistry},
    handle::DbHandle,
};
use std::sync::Arc;
use tracing::info;
use typegen_config::settings::Config;

const FILE_HEADER: &str = "// Generated by typegen. Do not edit.";

/// Assembles the full generated file: one interface per selected table.
pub struct TypingsGenerator {
    factory: Arc<dyn AdapterFactory>,
    pipeline: ColumnPipeline,
}

impl TypingsGenerator {
    pub fn new(factory: Arc<dyn AdapterFactory>, pipeline: ColumnPipeline) -> Self {
        TypingsGenerator { factory, pipeline }
    }

    pub async fn generate(&self, db: &DbHandle, config: &Config) -> Result<String, TypegenError> {
        let tables = get_tables_for_database(db, config, self.factory.as_ref()).await?;
        info!("generating typings for {} tables", tables.len());

        let mut declarations = Vec::with_capacity(tables.len());
        for table in &tables {
            let columns = self
                .pipeline
                .get_columns_for_table(db, table, config)
                .await?;
            declarations.push(stringify_table(table, &columns, config));
        }

        let mut output = String::from(FILE_HEADER);
        for declaration in declarations {
            output.push_str("\n\n");
            output.push_str(&declaration);
        }
        output.push('\n');
        Ok(output)
    }
}

impl Default for TypingsGenerator {
    fn default() -> Self {
        TypingsGenerator::new(Arc::new(DialectRegistry), ColumnPipeline::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::TypeMapConversion;
    use async_trait::async_trait;
    use connectors::{
        error::{AdapterError, DbError},
        sql::base::adapter::SchemaAdapter,
    };
    use model::{column::RawColumn, table::TableRef};

    #[derive(Debug)]
    struct StubAdapter;

    #[async_trait]
    impl SchemaAdapter for StubAdapter {
        async fn get_all_columns(
            &self,
            _db: &DbHandle,
            table: &TableRef,
        ) -> Result<Vec<RawColumn>, DbError> {
            match table.name.as_str() {
                "users" => Ok(vec![
                    RawColumn {
                        name: "id".to_string(),
                        native_type: "int".to_string(),
                        is_nullable: false,
                    },
                    RawColumn {
                        name: "bio".to_string(),
                        native_type: "text".to_string(),
                        is_nullable: true,
                    },
                ]),
                "orders" => Ok(vec![RawColumn {
                    name: "total".to_string(),
                    native_type: "numeric".to_string(),
                    is_nullable: false,
                }]),
                other => Err(DbError::TableNotFound(other.to_string())),
            }
        }

        async fn get_all_tables(
            &self,
            _db: &DbHandle,
            _schemas: &[String],
        ) -> Result<Vec<TableRef>, DbError> {
            Ok(vec![
                TableRef::new("users", "public"),
                TableRef::new("orders", "public"),
            ])
        }
    }

    struct StubFactory;

    impl AdapterFactory for StubFactory {
        fn build_adapter(&self, _dialect: &str) -> Result<Box<dyn SchemaAdapter>, AdapterError> {
            Ok(Box::new(StubAdapter))
        }
    }

    #[tokio::test]
    async fn test_generates_one_interface_per_table() {
        let generator = TypingsGenerator::new(
            Arc::new(StubFactory),
            ColumnPipeline::new(Arc::new(StubFactory), Arc::new(TypeMapConversion)),
        );
        let config = Config {
            dialect: "postgres".to_string(),
            ..Config::default()
        };
        let db = DbHandle::connect_lazy("postgres", "postgres://localhost/test").unwrap();

        let output = generator.generate(&db, &config).await.unwrap();
        assert_eq!(
            output,
            "// Generated by typegen. Do not edit.\n\n\
             export interface usersEntity {\n  id: number;\n  bio: string | null;\n}\n\n\
             export interface ordersEntity {\n  total: number;\n}\n"
        );
    }

    #[tokio::test]
    async fn test_allowlist_limits_generated_tables() {
        let generator = TypingsGenerator::new(
            Arc::new(StubFactory),
            ColumnPipeline::new(Arc::new(StubFactory), Arc::new(TypeMapConversion)),
        );
        let config = Config {
            dialect: "postgres".to_string(),
            tables: vec!["users".to_string(), "missing".to_string()],
            ..Config::default()
        };
        let db = DbHandle::connect_lazy("postgres", "postgres://localhost/test").unwrap();

        let output = generator.generate(&db, &config).await.unwrap();
        assert!(output.contains("usersEntity"));
        assert!(!output.contains("missing"));
    }
}
