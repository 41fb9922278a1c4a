//! Shapes discovered by content analysis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::PrimitiveType;

/// Discovered structure of one file: sanitized field name -> shape
pub type FileStructure = BTreeMap<String, FieldShape>;

/// Inferred shape of a single discovered field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldShape {
    #[serde(rename = "type")]
    pub field_type: PrimitiveType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_table: Option<String>,
    /// Nested structure of array-valued fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<FileStructure>,
}

impl FieldShape {
    pub fn new(field_type: PrimitiveType, required: bool) -> Self {
        Self {
            field_type,
            required,
            related_table: None,
            children: None,
        }
    }

    pub fn relation(related_table: impl Into<String>, children: FileStructure) -> Self {
        Self {
            field_type: PrimitiveType::Relation,
            required: false,
            related_table: Some(related_table.into()),
            children: Some(children),
        }
    }
}
