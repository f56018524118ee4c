use crate::{columns::stringify_column, error::TypegenError};
use connectors::{factory::AdapterFactory, handle::DbHandle};
use model::{column::Column, table::TableRef};
use typegen_config::settings::Config;

/// Interface name for a table, from the config's `${table}` template.
pub fn interface_name(table: &TableRef, config: &Config) -> String {
    config.interface_name_format.replace("${table}", &table.name)
}

/// Renders one table as an exported interface declaration.
pub fn stringify_table(table: &TableRef, columns: &[Column], config: &Config) -> String {
    let mut out = String::new();
    out.push_str("export interface ");
    out.push_str(&interface_name(table, config));
    out.push_str(" {\n");
    for column in columns {
        out.push_str("  ");
        out.push_str(&stringify_column(column, config));
        out.push_str(";\n");
    }
    out.push('}');
    out
}

/// Lists the tables selected for generation: every base table the adapter
/// reports for the configured schemas, narrowed by the allowlist and the
/// exclusion list. Filters match on the bare table name.
pub async fn get_tables_for_database(
    db: &DbHandle,
    config: &Config,
    factory: &dyn AdapterFactory,
) -> Result<Vec<TableRef>, TypegenError> {
    let adapter = factory.build_adapter(&config.dialect)?;
    let tables = adapter.get_all_tables(db, &config.schemas).await?;
    Ok(tables
        .into_iter()
        .filter(|table| config.tables.is_empty() || config.tables.contains(&table.name))
        .filter(|table| !config.excluded_tables.contains(&table.name))
        .collect())
}
