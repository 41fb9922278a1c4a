//! Relationship model
//!
//! Reserved: the pipeline does not derive relationships yet, so
//! [`SchemaResult::relationships`](super::SchemaResult) is always empty.

use serde::{Deserialize, Serialize};

/// A reference from one table's field to another table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub from_table: String,
    pub from_field: String,
    pub to_table: String,
    /// Referenced field, usually `id`
    pub to_field: String,
}
