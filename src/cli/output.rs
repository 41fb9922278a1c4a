//! Output formatting for CLI

use site_schema::{FieldSpec, SchemaResult, TableSpec};

fn field_flags(field: &FieldSpec) -> Vec<String> {
    let mut flags = Vec::new();
    if field.primary_key {
        flags.push("pk".to_string());
    }
    if field.auto_increment {
        flags.push("auto".to_string());
    }
    if field.required {
        flags.push("required".to_string());
    }
    if field.unique {
        flags.push("unique".to_string());
    }
    if let Some(default) = &field.default {
        flags.push(format!("default={default}"));
    }
    flags
}

/// One block per table listing its fields
pub fn format_table_listing(tables: &[TableSpec]) -> String {
    let mut output = String::new();
    for table in tables {
        output.push_str(&format!("{} ({} fields)\n", table.name, table.fields.len()));
        for field in &table.fields {
            let flags = field_flags(field);
            if flags.is_empty() {
                output.push_str(&format!("  {}: {}\n", field.name, field.field_type));
            } else {
                output.push_str(&format!(
                    "  {}: {} [{}]\n",
                    field.name,
                    field.field_type,
                    flags.join(", ")
                ));
            }
        }
        output.push('\n');
    }
    output
}

/// Short run summary written to stderr
pub fn format_summary(result: &SchemaResult) -> String {
    let metadata = &result.metadata;
    let mut output = format!(
        "✅ Generated {} table(s), {} field(s) for '{}' ({}, {})\n",
        result.tables.len(),
        result.total_fields,
        metadata.project_name,
        metadata.website_type,
        metadata.database_type
    );
    output.push_str(&format!("  Files analyzed: {}\n", metadata.files_analyzed));
    if !metadata.common_fields.is_empty() {
        output.push_str(&format!(
            "  Discovered fields: {}\n",
            metadata.common_fields.join(", ")
        ));
    }
    output
}
