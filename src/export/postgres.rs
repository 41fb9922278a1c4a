//! PostgreSQL dialect renderer

use std::fmt::Write;

use crate::export::sql::{default_clause, identifier_list, quote_identifier};
use crate::export::{ExportResult, RenderContext, SchemaRenderer, write_header};
use crate::models::{DatabaseType, FieldSpec, PrimitiveType, TableSpec};

const DIALECT: DatabaseType = DatabaseType::PostgreSql;

/// Renders `CREATE TABLE` statements for PostgreSQL
///
/// A lone auto-increment primary key collapses into `SERIAL PRIMARY KEY`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostgresRenderer;

impl PostgresRenderer {
    /// Native PostgreSQL column type for a field
    ///
    /// Auto-increment keys are not mapped here; the table writer turns them
    /// into `SERIAL`.
    ///
    /// ```rust
    /// use site_schema::export::PostgresRenderer;
    /// use site_schema::models::{FieldSpec, PrimitiveType};
    ///
    /// let count = FieldSpec::new("view_count", PrimitiveType::Integer);
    /// assert_eq!(PostgresRenderer::column_type(&count), "INTEGER");
    /// ```
    pub fn column_type(field: &FieldSpec) -> String {
        match field.field_type {
            PrimitiveType::Integer => "INTEGER".to_string(),
            PrimitiveType::String => format!("VARCHAR({})", field.effective_length()),
            PrimitiveType::Text => "TEXT".to_string(),
            PrimitiveType::Boolean => "BOOLEAN".to_string(),
            PrimitiveType::Date => "DATE".to_string(),
            PrimitiveType::Timestamp => "TIMESTAMP".to_string(),
            PrimitiveType::Decimal => {
                let (precision, scale) = field.effective_precision();
                format!("DECIMAL({precision},{scale})")
            }
            PrimitiveType::Json | PrimitiveType::Relation => "VARCHAR(255)".to_string(),
        }
    }

    fn column(field: &FieldSpec, inline_key: bool) -> String {
        let name = quote_identifier(&field.name, DIALECT);
        if inline_key {
            return format!("{name} SERIAL PRIMARY KEY");
        }

        let column_type = if field.auto_increment {
            "SERIAL".to_string()
        } else {
            Self::column_type(field)
        };
        let mut parts = vec![name, column_type];
        if field.required {
            parts.push("NOT NULL".to_string());
        }
        if field.unique {
            parts.push("UNIQUE".to_string());
        }
        if !field.auto_increment {
            if let Some(default) = default_clause(field, DIALECT, true) {
                parts.push(default);
            }
        }
        parts.join(" ")
    }

    fn write_table(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        let keys = table.primary_key_fields();
        let inline_key = match keys.as_slice() {
            [only] if only.auto_increment => Some(only.name.as_str()),
            _ => None,
        };

        let mut lines: Vec<String> = table
            .fields
            .iter()
            .map(|field| {
                let inline = inline_key == Some(field.name.as_str());
                format!("  {}", Self::column(field, inline))
            })
            .collect();

        if inline_key.is_none() && !keys.is_empty() {
            lines.push(format!(
                "  PRIMARY KEY ({})",
                identifier_list(keys.iter().map(|f| f.name.as_str()), DIALECT)
            ));
        }

        writeln!(out, "CREATE TABLE {} (", quote_identifier(&table.name, DIALECT))?;
        writeln!(out, "{}", lines.join(",\n"))?;
        writeln!(out, ");")?;
        writeln!(out)?;
        Ok(())
    }
}

impl SchemaRenderer for PostgresRenderer {
    fn format(&self) -> &'static str {
        "postgresql"
    }

    fn file_extension(&self) -> &'static str {
        "sql"
    }

    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String> {
        let mut out = String::new();
        write_header(&mut out, ctx, "--")?;
        for table in tables {
            Self::write_table(&mut out, table)?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ctx() -> RenderContext {
        RenderContext::new("Blog", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_serial_primary_key() {
        let table = TableSpec::new(
            "posts",
            vec![
                FieldSpec::id(),
                FieldSpec::new("title", PrimitiveType::String).required(),
                FieldSpec::new("is_draft", PrimitiveType::Boolean).with_default("1"),
                FieldSpec::created_at(),
            ],
        );
        let sql = PostgresRenderer.render(&[table], &ctx()).unwrap();
        let expected = "\
-- Database schema for Blog
-- Generated: 2024-01-01T00:00:00Z

CREATE TABLE \"posts\" (
  \"id\" SERIAL PRIMARY KEY,
  \"title\" VARCHAR(255) NOT NULL,
  \"is_draft\" BOOLEAN DEFAULT '1',
  \"created_at\" TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
);

";
        assert_eq!(sql, expected);
    }

    #[test]
    fn test_composite_key_trailing_clause() {
        let table = TableSpec::new(
            "post_tags",
            vec![
                FieldSpec::new("post_id", PrimitiveType::Integer).required().primary_key(),
                FieldSpec::new("tag_id", PrimitiveType::Integer).required().primary_key(),
            ],
        );
        let sql = PostgresRenderer.render(&[table], &ctx()).unwrap();
        assert!(sql.contains("  \"post_id\" INTEGER NOT NULL,\n"));
        assert!(sql.contains("  PRIMARY KEY (\"post_id\", \"tag_id\")\n"));
        assert!(!sql.contains("SERIAL"));
    }
}
