//! SQLite dialect renderer

use std::fmt::Write;

use crate::export::sql::{default_clause, identifier_list, quote_identifier};
use crate::export::{ExportResult, RenderContext, SchemaRenderer, write_header};
use crate::models::{DatabaseType, FieldSpec, PrimitiveType, TableSpec};

const DIALECT: DatabaseType = DatabaseType::Sqlite;

/// Renders `CREATE TABLE` statements for SQLite
///
/// A single primary key is declared inline; composite keys use a table-level
/// `PRIMARY KEY (...)` clause since SQLite rejects several inline keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqliteRenderer;

impl SqliteRenderer {
    /// SQLite storage class for a field
    ///
    /// Lengths and precisions are dropped: strings, dates and timestamps are
    /// `TEXT`, booleans `INTEGER`, decimals `REAL`.
    pub fn column_type(field: &FieldSpec) -> &'static str {
        match field.field_type {
            PrimitiveType::Integer => "INTEGER",
            PrimitiveType::String => "TEXT",
            PrimitiveType::Text => "TEXT",
            PrimitiveType::Boolean => "INTEGER",
            PrimitiveType::Date => "TEXT",
            PrimitiveType::Timestamp => "TEXT",
            PrimitiveType::Decimal => "REAL",
            PrimitiveType::Json | PrimitiveType::Relation => "TEXT",
        }
    }

    fn column(field: &FieldSpec, inline_key: bool) -> String {
        let mut parts = vec![
            quote_identifier(&field.name, DIALECT),
            Self::column_type(field).to_string(),
        ];
        let autoincrement = inline_key && field.auto_increment;
        if inline_key {
            parts.push("PRIMARY KEY".to_string());
            if autoincrement {
                parts.push("AUTOINCREMENT".to_string());
            }
        }
        if field.required && !autoincrement {
            parts.push("NOT NULL".to_string());
        }
        if field.unique {
            parts.push("UNIQUE".to_string());
        }
        if let Some(default) = default_clause(field, DIALECT, false) {
            parts.push(default);
        }
        parts.join(" ")
    }

    fn write_table(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        let keys = table.primary_key_fields();
        let inline = keys.len() == 1;

        let mut lines: Vec<String> = table
            .fields
            .iter()
            .map(|field| format!("  {}", Self::column(field, inline && field.primary_key)))
            .collect();

        if keys.len() > 1 {
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

impl SchemaRenderer for SqliteRenderer {
    fn format(&self) -> &'static str {
        "sqlite"
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
        RenderContext::new("Docs", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_inline_autoincrement_key() {
        let table = TableSpec::new(
            "articles",
            vec![
                FieldSpec::id(),
                FieldSpec::new("title", PrimitiveType::String).with_length(80).required(),
                FieldSpec::new("score", PrimitiveType::Decimal),
                FieldSpec::created_at(),
            ],
        );
        let sql = SqliteRenderer.render(&[table], &ctx()).unwrap();
        let expected = "\
-- Database schema for Docs
-- Generated: 2024-01-01T00:00:00Z

CREATE TABLE \"articles\" (
  \"id\" INTEGER PRIMARY KEY AUTOINCREMENT,
  \"title\" TEXT NOT NULL,
  \"score\" REAL,
  \"created_at\" TEXT NOT NULL
);

";
        assert_eq!(sql, expected);
    }

    #[test]
    fn test_composite_key_is_table_level() {
        let table = TableSpec::new(
            "project_skills",
            vec![
                FieldSpec::new("project_id", PrimitiveType::Integer).required().primary_key(),
                FieldSpec::new("skill_id", PrimitiveType::Integer).required().primary_key(),
            ],
        );
        let sql = SqliteRenderer.render(&[table], &ctx()).unwrap();
        assert_eq!(sql.matches("PRIMARY KEY").count(), 1);
        assert!(sql.contains("  PRIMARY KEY (\"project_id\", \"skill_id\")\n"));
    }
}
