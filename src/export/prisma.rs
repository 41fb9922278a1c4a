//! Prisma schema exporter
//!
//! Emits one `model` per table. Model names are the PascalCase form of the
//! table name and keep the physical name through `@@map`.

use std::fmt::Write;

use crate::export::{ExportResult, RenderContext, SchemaRenderer, type_name, write_header};
use crate::inference::is_numeric;
use crate::models::{FieldSpec, PrimitiveType, TableSpec};

#[derive(Debug, Default, Clone, Copy)]
pub struct PrismaExporter;

impl PrismaExporter {
    /// Model name for a table, e.g. `order_items` -> `OrderItems`
    pub fn model_name(table: &str) -> String {
        type_name(table)
    }

    pub fn field_type(field: &FieldSpec) -> &'static str {
        match field.field_type {
            PrimitiveType::Integer => "Int",
            PrimitiveType::String | PrimitiveType::Text => "String",
            PrimitiveType::Boolean => "Boolean",
            PrimitiveType::Date | PrimitiveType::Timestamp => "DateTime",
            PrimitiveType::Decimal => "Decimal",
            _ => "String",
        }
    }

    /// Typed `@default(...)` value; `None` when the literal does not fit the type
    fn default_value(field: &FieldSpec) -> ExportResult<Option<String>> {
        if field.auto_increment {
            return Ok(Some("autoincrement()".to_string()));
        }
        if field.field_type == PrimitiveType::Timestamp {
            return Ok(Some("now()".to_string()));
        }
        let Some(value) = field.default.as_deref() else {
            return Ok(None);
        };
        let rendered = match field.field_type {
            PrimitiveType::Boolean => match value.to_ascii_lowercase().as_str() {
                "1" | "true" => Some("true".to_string()),
                "0" | "false" => Some("false".to_string()),
                _ => None,
            },
            PrimitiveType::Integer | PrimitiveType::Decimal => {
                is_numeric(value).then(|| value.trim().to_string())
            }
            PrimitiveType::Date => None,
            _ => Some(serde_json::to_string(value)?),
        };
        Ok(rendered)
    }

    fn field_line(field: &FieldSpec, single_key: bool) -> ExportResult<String> {
        let optional = !field.required && !field.primary_key;
        let mut parts = vec![
            field.name.clone(),
            format!("{}{}", Self::field_type(field), if optional { "?" } else { "" }),
        ];
        if single_key && field.primary_key {
            parts.push("@id".to_string());
        }
        if let Some(default) = Self::default_value(field)? {
            parts.push(format!("@default({default})"));
        }
        if field.unique && !(single_key && field.primary_key) {
            parts.push("@unique".to_string());
        }
        match field.field_type {
            PrimitiveType::String => {
                parts.push(format!("@db.VarChar({})", field.effective_length()));
            }
            PrimitiveType::Decimal => {
                let (precision, scale) = field.effective_precision();
                parts.push(format!("@db.Decimal({precision}, {scale})"));
            }
            _ => {}
        }
        Ok(format!("  {}", parts.join(" ")))
    }

    fn write_model(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        let keys = table.primary_key_fields();
        let single_key = keys.len() == 1;

        writeln!(out, "model {} {{", Self::model_name(&table.name))?;
        for field in &table.fields {
            writeln!(out, "{}", Self::field_line(field, single_key)?)?;
        }
        writeln!(out)?;
        if keys.len() > 1 {
            let names: Vec<&str> = keys.iter().map(|f| f.name.as_str()).collect();
            writeln!(out, "  @@id([{}])", names.join(", "))?;
        }
        writeln!(out, "  @@map({})", serde_json::to_string(&table.name)?)?;
        writeln!(out, "}}")?;
        writeln!(out)?;
        Ok(())
    }
}

impl SchemaRenderer for PrismaExporter {
    fn format(&self) -> &'static str {
        "prisma"
    }

    fn file_extension(&self) -> &'static str {
        "prisma"
    }

    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String> {
        let mut out = String::new();
        write_header(&mut out, ctx, "//")?;
        for table in tables {
            Self::write_model(&mut out, table)?;
        }
        Ok(out)
    }
}
