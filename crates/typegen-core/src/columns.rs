use crate::{
    conversion::{ColumnConversion, TypeMapConversion},
    error::TypegenError,
};
use connectors::{
    factory::{AdapterFactory, DialectRegistry},
    handle::DbHandle,
};
use model::{
    column::{Column, PropertyOptionality},
    table::TableRef,
};
use std::sync::Arc;
use tracing::debug;
use typegen_config::settings::Config;

/// Renders one column as a TypeScript property declaration:
/// `<name><?>: <tsType>[ | null]`.
///
/// The `required` and `optional` policies override the column's own flag;
/// `dynamic` (and an absent policy) follow it. Nullability is independent of
/// the marker and only controls the ` | null` suffix.
pub fn stringify_column(column: &Column, config: &Config) -> String {
    let optional = match config.property_optionality.unwrap_or_default() {
        PropertyOptionality::Required => false,
        PropertyOptionality::Optional => true,
        PropertyOptionality::Dynamic => column.optional,
    };
    let marker = if optional { "?" } else { "" };
    let null_suffix = if column.nullable { " | null" } else { "" };
    format!("{}{marker}: {}{null_suffix}", column.name, column.ts_type)
}

/// Per-table column discovery: adapter resolution, raw metadata retrieval,
/// name qualification, and type conversion.
///
/// Collaborators are injected so tests can substitute them; `Default` wires
/// the real registry and type-map conversion.
pub struct ColumnPipeline {
    factory: Arc<dyn AdapterFactory>,
    conversion: Arc<dyn ColumnConversion>,
}

impl ColumnPipeline {
    pub fn new(factory: Arc<dyn AdapterFactory>, conversion: Arc<dyn ColumnConversion>) -> Self {
        ColumnPipeline {
            factory,
            conversion,
        }
    }

    /// Returns one `Column` per raw column of `table`, preserving the
    /// adapter's ordering. Collaborator failures propagate unchanged; no
    /// partial results are returned.
    pub async fn get_columns_for_table(
        &self,
        db: &DbHandle,
        table: &TableRef,
        config: &Config,
    ) -> Result<Vec<Column>, TypegenError> {
        let adapter = self.factory.build_adapter(&config.dialect)?;
        let raw_columns = adapter.get_all_columns(db, table).await?;
        debug!("converting {} columns for {table}", raw_columns.len());

        let mut columns = Vec::with_capacity(raw_columns.len());
        for raw in raw_columns {
            let full_name =
                self.conversion
                    .generate_full_column_name(&table.name, &table.schema, &raw.name);
            let converted = self
                .conversion
                .convert_type(&full_name, &raw.native_type, config)
                .await?;
            columns.push(Column {
                name: raw.name,
                native_type: raw.native_type,
                ts_type: converted.ts_type,
                nullable: raw.is_nullable,
                optional: converted.optional,
            });
        }
        Ok(columns)
    }
}

impl Default for ColumnPipeline {
    fn default() -> Self {
        ColumnPipeline::new(Arc::new(DialectRegistry), Arc::new(TypeMapConversion))
    }
}
