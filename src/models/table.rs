//! Table model for the schema

use serde::{Deserialize, Serialize};

use super::field::FieldSpec;

/// A table (or collection) with its fields in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

impl TableSpec {
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Copy of this table with `prefix` prepended to its name
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            name: format!("{}{}", prefix, self.name),
            fields: self.fields.clone(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    /// Fields flagged as primary key, in declaration order
    pub fn primary_key_fields(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.primary_key).collect()
    }

    pub fn has_composite_key(&self) -> bool {
        self.primary_key_fields().len() > 1
    }
}
