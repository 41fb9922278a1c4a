//! JSON exporter

use serde::Serialize;

use crate::export::{ExportResult, RenderContext, SchemaRenderer};
use crate::models::TableSpec;

/// Exports the table list as a pretty-printed JSON document
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDocument<'a> {
    project: &'a str,
    generated_at: String,
    tables: &'a [TableSpec],
}

impl SchemaRenderer for JsonExporter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String> {
        let document = JsonDocument {
            project: &ctx.project_name,
            generated_at: ctx.timestamp(),
            tables,
        };
        let mut out = serde_json::to_string_pretty(&document)?;
        out.push('\n');
        Ok(out)
    }
}
