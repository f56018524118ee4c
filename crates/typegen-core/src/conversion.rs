use crate::error::ConvertError;
use async_trait::async_trait;
use lazy_static::lazy_static;
use model::column::ConvertedType;
use std::collections::HashMap;
use typegen_config::settings::Config;

/// Fallback TypeScript type for native types with no mapping.
const FALLBACK_TS_TYPE: &str = "any";

lazy_static! {
    static ref DEFAULT_TYPE_MAP: HashMap<&'static str, &'static str> = build_default_type_map();
}

fn build_default_type_map() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();

    let number = [
        "tinyint",
        "smallint",
        "mediumint",
        "int",
        "integer",
        "bigint",
        "year",
        "serial",
        "smallserial",
        "bigserial",
        "int2",
        "int4",
        "int8",
        "float",
        "float4",
        "float8",
        "double",
        "double precision",
        "decimal",
        "numeric",
        "real",
        "money",
        "oid",
    ];
    let string = [
        "char",
        "character",
        "varchar",
        "character varying",
        "text",
        "tinytext",
        "mediumtext",
        "longtext",
        "nchar",
        "nvarchar",
        "uuid",
        "enum",
        "set",
        "name",
        "citext",
        "time",
        "time without time zone",
        "time with time zone",
        "timetz",
        "interval",
        "inet",
        "cidr",
        "macaddr",
    ];
    let boolean = ["bit", "bool", "boolean"];
    let date = [
        "date",
        "datetime",
        "timestamp",
        "timestamp without time zone",
        "timestamp with time zone",
        "timestamptz",
    ];
    let buffer = [
        "blob",
        "tinyblob",
        "mediumblob",
        "longblob",
        "binary",
        "varbinary",
        "bytea",
    ];
    let object = ["json", "jsonb"];

    for native in number {
        map.insert(native, "number");
    }
    for native in string {
        map.insert(native, "string");
    }
    for native in boolean {
        map.insert(native, "boolean");
    }
    for native in date {
        map.insert(native, "Date");
    }
    for native in buffer {
        map.insert(native, "Buffer");
    }
    for native in object {
        map.insert(native, "Object");
    }

    map
}

// "VARCHAR(255)" and "varchar" name the same type in the map.
fn normalize_type_name(native_type: &str) -> String {
    let bare = native_type
        .split_once('(')
        .map_or(native_type, |(head, _)| head);
    bare.trim().to_lowercase()
}

/// Type conversion and full-name qualification for columns.
#[async_trait]
pub trait ColumnConversion: Send + Sync {
    /// Fully-qualified column reference used as the `typeOverrides` key.
    fn generate_full_column_name(&self, table: &str, schema: &str, column: &str) -> String;

    /// Converts a native database type to a TypeScript type.
    async fn convert_type(
        &self,
        full_column_name: &str,
        native_type: &str,
        config: &Config,
    ) -> Result<ConvertedType, ConvertError>;
}

/// The built-in conversion: per-column overrides first, then the user's
/// `typeMap` extensions, then the default map. Unmapped types become `any`
/// with a derived optional signal, or fail in strict mode.
pub struct TypeMapConversion;

#[async_trait]
impl ColumnConversion for TypeMapConversion {
    fn generate_full_column_name(&self, table: &str, schema: &str, column: &str) -> String {
        [schema, table, column]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(".")
    }

    async fn convert_type(
        &self,
        full_column_name: &str,
        native_type: &str,
        config: &Config,
    ) -> Result<ConvertedType, ConvertError> {
        if let Some(overridden) = config.type_overrides.get(full_column_name) {
            return Ok(ConvertedType {
                ts_type: overridden.clone(),
                optional: false,
            });
        }

        let normalized = normalize_type_name(native_type);

        // Walk the user map in key order so a native type listed under two
        // TypeScript types resolves the same way on every run.
        let mut user_map: Vec<_> = config.type_map.iter().collect();
        user_map.sort_by_key(|entry| entry.0);
        for (ts_type, natives) in user_map {
            if natives.iter().any(|native| *native == normalized) {
                return Ok(ConvertedType {
                    ts_type: ts_type.clone(),
                    optional: false,
                });
            }
        }

        if let Some(ts_type) = DEFAULT_TYPE_MAP.get(normalized.as_str()) {
            return Ok(ConvertedType {
                ts_type: (*ts_type).to_string(),
                optional: false,
            });
        }

        if config.strict_types {
            return Err(ConvertError::UnknownType {
                column: full_column_name.to_string(),
                native_type: native_type.to_string(),
            });
        }

        // Unmapped types degrade to `any`; such properties are also marked
        // optional so generated values need not carry them.
        Ok(ConvertedType {
            ts_type: FALLBACK_TS_TYPE.to_string(),
            optional: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn convert(native: &str, config: &Config) -> Result<ConvertedType, ConvertError> {
        TypeMapConversion
            .convert_type("public.users.col", native, config)
            .await
    }

    #[tokio::test]
    async fn test_builtin_map_covers_common_types() {
        let config = Config::default();
        assert_eq!(convert("varchar", &config).await.unwrap().ts_type, "string");
        assert_eq!(convert("int", &config).await.unwrap().ts_type, "number");
        assert_eq!(convert("bool", &config).await.unwrap().ts_type, "boolean");
        assert_eq!(convert("timestamptz", &config).await.unwrap().ts_type, "Date");
        assert_eq!(convert("bytea", &config).await.unwrap().ts_type, "Buffer");
        assert_eq!(convert("jsonb", &config).await.unwrap().ts_type, "Object");
    }

    #[tokio::test]
    async fn test_type_names_are_normalized() {
        let config = Config::default();
        assert_eq!(convert("VARCHAR(255)", &config).await.unwrap().ts_type, "string");
        assert_eq!(convert("Numeric(10,2)", &config).await.unwrap().ts_type, "number");
    }

    #[tokio::test]
    async fn test_override_wins_over_maps() {
        let mut config = Config::default();
        config
            .type_overrides
            .insert("public.users.col".to_string(), "UserId".to_string());
        let converted = convert("int", &config).await.unwrap();
        assert_eq!(converted.ts_type, "UserId");
        assert!(!converted.optional);
    }

    #[tokio::test]
    async fn test_user_type_map_extends_builtin() {
        let mut config = Config::default();
        config
            .type_map
            .insert("string".to_string(), vec!["ltree".to_string()]);
        assert_eq!(convert("ltree", &config).await.unwrap().ts_type, "string");
    }

    #[tokio::test]
    async fn test_duplicate_user_map_entries_resolve_by_key_order() {
        let mut config = Config::default();
        config
            .type_map
            .insert("Zebra".to_string(), vec!["ltree".to_string()]);
        config
            .type_map
            .insert("Apple".to_string(), vec!["ltree".to_string()]);
        for _ in 0..8 {
            assert_eq!(convert("ltree", &config).await.unwrap().ts_type, "Apple");
        }
    }

    #[tokio::test]
    async fn test_unmapped_type_falls_back_to_any_optional() {
        let config = Config::default();
        let converted = convert("geometry", &config).await.unwrap();
        assert_eq!(converted.ts_type, "any");
        assert!(converted.optional);
    }

    #[tokio::test]
    async fn test_strict_mode_rejects_unmapped_type() {
        let config = Config {
            strict_types: true,
            ..Config::default()
        };
        let err = convert("geometry", &config).await.unwrap_err();
        assert!(matches!(
            err,
            ConvertError::UnknownType { native_type, .. } if native_type == "geometry"
        ));
    }

    #[test]
    fn test_full_column_name_joins_parts() {
        let conversion = TypeMapConversion;
        assert_eq!(
            conversion.generate_full_column_name("users", "public", "id"),
            "public.users.id"
        );
        assert_eq!(
            conversion.generate_full_column_name("users", "", "id"),
            "users.id"
        );
    }
}
