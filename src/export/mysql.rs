//! MySQL dialect renderer

use std::fmt::Write;

use crate::export::sql::{default_clause, identifier_list, quote_identifier};
use crate::export::{ExportResult, RenderContext, SchemaRenderer, write_header};
use crate::models::{DatabaseType, FieldSpec, PrimitiveType, TableSpec};

const DIALECT: DatabaseType = DatabaseType::MySql;

/// Renders `CREATE TABLE` statements for MySQL (InnoDB, utf8mb4)
#[derive(Debug, Default, Clone, Copy)]
pub struct MySqlRenderer;

impl MySqlRenderer {
    /// Native MySQL column type for a field
    ///
    /// # Arguments
    ///
    /// * `field` - The field to map; only its type, length and precision are read
    ///
    /// # Returns
    ///
    /// The bare type, without `NOT NULL` or other modifiers. `String` uses the
    /// field length (default 255), `Decimal` its precision and scale (default
    /// `10,2`). `Json` and `Relation` fall back to `VARCHAR(255)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use site_schema::export::MySqlRenderer;
    /// use site_schema::models::{FieldSpec, PrimitiveType};
    ///
    /// let sku = FieldSpec::new("sku", PrimitiveType::String).with_length(100);
    /// assert_eq!(MySqlRenderer::column_type(&sku), "VARCHAR(100)");
    ///
    /// let price = FieldSpec::new("price", PrimitiveType::Decimal);
    /// assert_eq!(MySqlRenderer::column_type(&price), "DECIMAL(10,2)");
    /// ```
    pub fn column_type(field: &FieldSpec) -> String {
        match field.field_type {
            PrimitiveType::Integer => "INT".to_string(),
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

    fn column(field: &FieldSpec) -> String {
        let mut parts = vec![
            quote_identifier(&field.name, DIALECT),
            Self::column_type(field),
        ];
        if field.required {
            parts.push("NOT NULL".to_string());
        }
        if field.auto_increment {
            parts.push("AUTO_INCREMENT".to_string());
        }
        if field.unique {
            parts.push("UNIQUE".to_string());
        }
        if let Some(default) = default_clause(field, DIALECT, true) {
            parts.push(default);
        }
        parts.join(" ")
    }

    fn write_table(out: &mut String, table: &TableSpec) -> ExportResult<()> {
        let mut lines: Vec<String> = table
            .fields
            .iter()
            .map(|field| format!("  {}", Self::column(field)))
            .collect();

        let keys = table.primary_key_fields();
        if !keys.is_empty() {
            lines.push(format!(
                "  PRIMARY KEY ({})",
                identifier_list(keys.iter().map(|f| f.name.as_str()), DIALECT)
            ));
        }

        writeln!(out, "CREATE TABLE {} (", quote_identifier(&table.name, DIALECT))?;
        writeln!(out, "{}", lines.join(",\n"))?;
        writeln!(out, ") ENGINE=InnoDB DEFAULT CHARSET=utf8mb4;")?;
        writeln!(out)?;
        Ok(())
    }
}

impl SchemaRenderer for MySqlRenderer {
    fn format(&self) -> &'static str {
        "mysql"
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
