//! MongoDB renderer: one `createCollection` call with a `$jsonSchema`
//! validator per table
//!
//! Per-field modifiers are not expressed. Auto-increment fields are left out
//! of both `required` and `properties`; MongoDB supplies `_id` itself.

use std::fmt::Write;

use crate::export::{ExportResult, RenderContext, SchemaRenderer, write_header};
use crate::models::{FieldSpec, PrimitiveType, TableSpec};

#[derive(Debug, Default, Clone, Copy)]
pub struct MongoDbRenderer;

impl MongoDbRenderer {
    /// BSON type name
    pub fn bson_type(field: &FieldSpec) -> &'static str {
        match field.field_type {
            PrimitiveType::Integer => "int",
            PrimitiveType::String => "string",
            PrimitiveType::Text => "string",
            PrimitiveType::Boolean => "bool",
            PrimitiveType::Date => "date",
            PrimitiveType::Timestamp => "date",
            PrimitiveType::Decimal => "double",
            PrimitiveType::Json | PrimitiveType::Relation => "string",
        }
    }

    fn write_collection(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        let fields: Vec<&FieldSpec> = table.fields.iter().filter(|f| !f.auto_increment).collect();
        let required: Vec<&str> = fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect();

        writeln!(
            out,
            "db.createCollection({}, {{",
            serde_json::to_string(&table.name)?
        )?;
        writeln!(out, "  validator: {{")?;
        writeln!(out, "    $jsonSchema: {{")?;
        writeln!(out, "      bsonType: \"object\",")?;
        writeln!(out, "      required: {},", serde_json::to_string(&required)?)?;
        writeln!(out, "      properties: {{")?;
        let properties = fields
            .iter()
            .map(|field| -> ExportResult<String> {
                Ok(format!(
                    "        {}: {{ bsonType: \"{}\" }}",
                    serde_json::to_string(&field.name)?,
                    Self::bson_type(field)
                ))
            })
            .collect::<ExportResult<Vec<_>>>()?;
        if !properties.is_empty() {
            writeln!(out, "{}", properties.join(",\n"))?;
        }
        writeln!(out, "      }}")?;
        writeln!(out, "    }}")?;
        writeln!(out, "  }}")?;
        writeln!(out, "}});")?;
        writeln!(out)?;
        Ok(())
    }
}

impl SchemaRenderer for MongoDbRenderer {
    fn format(&self) -> &'static str {
        "mongodb"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String> {
        let mut out = String::new();
        write_header(&mut out, ctx, "//")?;
        for table in tables {
            Self::write_collection(&mut out, table)?;
        }
        Ok(out)
    }
}
