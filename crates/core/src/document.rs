use serde::{Deserialize, Serialize};

/// Text description of one table: business context, DDL, and sample rows.
///
/// Built once at startup per table and owned by the schema index; immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaDocument {
    pub table_name: String,
    pub content: String,
}

impl SchemaDocument {
    #[must_use]
    pub fn new(table_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self { table_name: table_name.into(), content: content.into() }
    }
}
