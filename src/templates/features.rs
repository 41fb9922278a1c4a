//! Optional feature tables appended after the domain catalog

use tracing::debug;

use crate::models::{FieldSpec, PrimitiveType, TableSpec};

use super::{int, string, text};

/// Generic entity-attribute-value table
pub fn metadata_table() -> TableSpec {
    TableSpec::new(
        "metadata",
        vec![
            FieldSpec::id(),
            string("entity_type", 50).required(),
            int("entity_id").required(),
            string("meta_key", 255).required(),
            text("meta_value"),
            FieldSpec::created_at(),
        ],
    )
}

/// Uploaded asset table
pub fn media_table() -> TableSpec {
    TableSpec::new(
        "media",
        vec![
            FieldSpec::id(),
            string("filename", 255).required(),
            string("original_name", 255).required(),
            string("mime_type", 100).required(),
            int("size").required(),
            string("url", 500).required(),
            string("alt_text", 255),
            int("width"),
            int("height"),
            FieldSpec::new("uploaded_at", PrimitiveType::Timestamp).required(),
        ],
    )
}

/// Append the metadata and/or media tables, prefixed
///
/// A table whose prefixed name is already present is not appended again.
pub fn apply_features(
    tables: &mut Vec<TableSpec>,
    prefix: &str,
    include_metadata: bool,
    include_images: bool,
) {
    if include_metadata {
        append_once(tables, metadata_table().with_prefix(prefix));
    }
    if include_images {
        append_once(tables, media_table().with_prefix(prefix));
    }
}

fn append_once(tables: &mut Vec<TableSpec>, table: TableSpec) {
    if tables.iter().any(|t| t.name == table.name) {
        debug!(table = %table.name, "Feature table already present");
        return;
    }
    tables.push(table);
}
