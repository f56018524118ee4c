use crate::error::ConfigError;
use model::column::PropertyOptionality;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, path::Path};

pub const DEFAULT_INTERFACE_NAME_FORMAT: &str = "${table}Entity";

/// Per-run generation settings, loaded from a JSON config file.
///
/// Keys are camelCase to match the config file format; every field has a
/// default so a minimal config only needs `dialect` and `connection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Which database adapter to use: "mysql", "postgres", ...
    pub dialect: String,
    /// Driver connection string.
    pub connection: String,
    /// How the `?` marker is applied; `None` behaves as `dynamic`.
    pub property_optionality: Option<PropertyOptionality>,
    /// Schemas to enumerate tables from; empty means the dialect default.
    pub schemas: Vec<String>,
    /// Allowlist of table names; empty means every table.
    pub tables: Vec<String>,
    /// Table names to skip even when allowlisted.
    pub excluded_tables: Vec<String>,
    /// Interface name template; `${table}` is replaced with the table name.
    pub interface_name_format: String,
    /// Per-column type overrides keyed by the full column name
    /// (`schema.table.column`).
    pub type_overrides: HashMap<String, String>,
    /// Extra TypeScript-type → native-type-names mappings, consulted before
    /// the built-in map.
    pub type_map: HashMap<String, Vec<String>>,
    /// When true, unmapped native types fail instead of falling back to
    /// `any`.
    pub strict_types: bool,
    /// Default output path for the generated file.
    pub output: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dialect: String::new(),
            connection: String::new(),
            property_optionality: None,
            schemas: Vec::new(),
            tables: Vec::new(),
            excluded_tables: Vec::new(),
            interface_name_format: DEFAULT_INTERFACE_NAME_FORMAT.to_string(),
            type_overrides: HashMap::new(),
            type_map: HashMap::new(),
            strict_types: false,
            output: None,
        }
    }
}

impl Config {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dialect.is_empty() {
            return Err(ConfigError::Invalid("dialect must be set".to_string()));
        }
        if self.connection.is_empty() {
            return Err(ConfigError::Invalid("connection must be set".to_string()));
        }
        if !self.interface_name_format.contains("${table}") {
            return Err(ConfigError::Invalid(
                "interfaceNameFormat must contain the ${table} placeholder".to_string(),
            ));
        }
        Ok(())
    }
}
