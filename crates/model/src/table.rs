use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a table for which columns are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: String,
    pub schema: String,
}

impl TableRef {
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        TableRef {
            name: name.into(),
            schema: schema.into(),
        }
    }

    /// Schema-qualified name, or the bare name when no schema is set.
    pub fn qualified_name(&self) -> String {
        if self.schema.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
