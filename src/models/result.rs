//! Output of one generation run

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{DatabaseType, WebsiteType};
use super::relationship::Relationship;
use super::shape::FileStructure;
use super::table::TableSpec;

/// Analysis byproducts attached to a [`SchemaResult`]
///
/// Files whose analysis failed do not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMetadata {
    pub project_name: String,
    pub website_type: WebsiteType,
    pub database_type: DatabaseType,
    pub generated_at: DateTime<Utc>,
    pub files_analyzed: usize,
    /// Sorted union of top-level field names found across files
    pub common_fields: Vec<String>,
    /// Original file name -> discovered structure
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub file_structures: BTreeMap<String, FileStructure>,
}

/// Complete result of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResult {
    /// Schema text in the configured dialect
    pub sql: String,
    pub tables: Vec<TableSpec>,
    pub total_fields: usize,
    pub metadata: SchemaMetadata,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl SchemaResult {
    pub fn table(&self, name: &str) -> Option<&TableSpec> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Sum of field counts across `tables`
pub fn count_fields(tables: &[TableSpec]) -> usize {
    tables.iter().map(|t| t.fields.len()).sum()
}
