use serde::{Deserialize, Serialize};

/// A fully-typed table column, ready for rendering.
///
/// Nullability and optionality are independent: `nullable` controls the
/// ` | null` union suffix, `optional` controls the `?` property marker.
/// Both may apply to the same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: String,
    /// Native database type name, kept for diagnostics; not rendered.
    pub native_type: String,
    /// The converted TypeScript type name.
    pub ts_type: String,
    pub nullable: bool,
    pub optional: bool,
}

/// Unconverted column metadata as returned by a schema adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawColumn {
    pub name: String,
    pub native_type: String,
    pub is_nullable: bool,
}

/// Result of converting a native type: the TypeScript type name plus the
/// optionality signal derived during conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedType {
    pub ts_type: String,
    pub optional: bool,
}

/// Per-run policy deciding how the `?` marker is applied to properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyOptionality {
    /// Every property renders as required.
    Required,
    /// Every property renders as optional.
    Optional,
    /// Each property follows its column's own `optional` flag.
    #[default]
    Dynamic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_optionality_lowercase_literals() {
        let parsed: PropertyOptionality = serde_json::from_str("\"required\"").unwrap();
        assert_eq!(parsed, PropertyOptionality::Required);
        let parsed: PropertyOptionality = serde_json::from_str("\"dynamic\"").unwrap();
        assert_eq!(parsed, PropertyOptionality::Dynamic);
        assert!(serde_json::from_str::<PropertyOptionality>("\"sometimes\"").is_err());
    }

    #[test]
    fn test_property_optionality_defaults_to_dynamic() {
        assert_eq!(
            PropertyOptionality::default(),
            PropertyOptionality::Dynamic
        );
    }
}
