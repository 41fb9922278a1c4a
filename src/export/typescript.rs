//! TypeScript interface exporter

use std::fmt::Write;

use crate::export::{ExportResult, RenderContext, SchemaRenderer, type_name, write_header};
use crate::models::{FieldSpec, PrimitiveType, TableSpec};

/// Emits one `export interface` per table
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptExporter;

impl TypeScriptExporter {
    pub fn field_type(field: &FieldSpec) -> &'static str {
        match field.field_type {
            PrimitiveType::Integer | PrimitiveType::Decimal => "number",
            PrimitiveType::String | PrimitiveType::Text => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Date | PrimitiveType::Timestamp => "Date",
            _ => "unknown",
        }
    }

    fn write_interface(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        writeln!(out, "export interface {} {{", type_name(&table.name))?;
        for field in &table.fields {
            let optional = !field.required && !field.primary_key;
            writeln!(
                out,
                "  {}{}: {};",
                field.name,
                if optional { "?" } else { "" },
                Self::field_type(field)
            )?;
        }
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }
}

impl SchemaRenderer for TypeScriptExporter {
    fn format(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String> {
        let mut out = String::new();
        write_header(&mut out, ctx, "//")?;
        for table in tables {
            Self::write_interface(&mut out, table)?;
        }
        Ok(out)
    }
}
