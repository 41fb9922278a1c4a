//! Export functionality
//!
//! Every output format is a [`SchemaRenderer`] strategy:
//! - SQL dialects: MySQL, PostgreSQL, SQLite
//! - MongoDB collection validators
//! - JSON, Prisma schema and TypeScript interfaces
//!
//! [`RendererRegistry`] maps a [`DatabaseType`] or an [`ExportFormat`] to its
//! renderer.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use site_schema::export::{RenderContext, RendererRegistry};
//! use site_schema::models::{DatabaseType, FieldSpec, PrimitiveType, TableSpec};
//!
//! let tables = vec![TableSpec::new(
//!     "notes",
//!     vec![FieldSpec::id(), FieldSpec::new("body", PrimitiveType::Text)],
//! )];
//! let ctx = RenderContext::new("Notes", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
//!
//! let registry = RendererRegistry::builtin();
//! let sql = registry
//!     .dialect(DatabaseType::PostgreSql)
//!     .unwrap()
//!     .render(&tables, &ctx)
//!     .unwrap();
//! assert!(sql.contains("\"id\" SERIAL PRIMARY KEY"));
//! ```

mod json;
mod mongodb;
mod mysql;
mod postgres;
mod prisma;
pub mod sql;
mod sqlite;
mod typescript;

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use convert_case::{Case, Casing};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{DatabaseType, TableSpec};
use crate::validation::TableValidationError;

pub use json::JsonExporter;
pub use mongodb::MongoDbRenderer;
pub use mysql::MySqlRenderer;
pub use postgres::PostgresRenderer;
pub use prisma::PrismaExporter;
pub use sqlite::SqliteRenderer;
pub use typescript::TypeScriptExporter;

/// Error during export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Render error: {0}")]
    Render(String),
    #[error("Validation error: {0}")]
    Validation(#[from] TableValidationError),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<std::fmt::Error> for ExportError {
    fn from(err: std::fmt::Error) -> Self {
        ExportError::Render(err.to_string())
    }
}

pub type ExportResult<T> = Result<T, ExportError>;

/// Rendered output of one renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedSchema {
    pub content: String,
    /// Format identifier
    pub format: String,
    pub file_extension: String,
}

/// Values shared by every renderer for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub project_name: String,
    pub generated_at: DateTime<Utc>,
}

impl RenderContext {
    pub fn new(project_name: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            project_name: project_name.into(),
            generated_at,
        }
    }

    /// RFC 3339 header timestamp, second precision
    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Write the two-line header followed by a blank line
///
/// The project name is user input; control characters in it are replaced
/// with spaces so it cannot end the comment line.
pub(crate) fn write_header(out: &mut String, ctx: &RenderContext, comment: &str) -> ExportResult<()> {
    writeln!(
        out,
        "{comment} Database schema for {}",
        single_line(&ctx.project_name)
    )?;
    writeln!(out, "{comment} Generated: {}", ctx.timestamp())?;
    writeln!(out)?;
    Ok(())
}

fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// PascalCase type name for a table, as used by the Prisma and TypeScript
/// exporters
///
/// Identifiers may not start with a digit in either language, so a name that
/// would (for example from a `2024_` table prefix) gets a `Table` prefix.
pub(crate) fn type_name(table: &str) -> String {
    let name = table.to_case(Case::Pascal);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Table{name}")
    } else {
        name
    }
}

/// Strategy rendering a table list into one output format
pub trait SchemaRenderer: Send + Sync {
    /// Format identifier, e.g. `"mysql"` or `"prisma"`
    fn format(&self) -> &'static str;

    fn file_extension(&self) -> &'static str;

    /// Render `tables` into this format's text
    ///
    /// # Arguments
    ///
    /// * `tables` - Tables in output order; each renders as one block with
    ///   one line per field
    /// * `ctx` - Project name and timestamp for the header
    ///
    /// # Returns
    ///
    /// The complete document, starting with the two-line header comment
    /// (JSON carries the same values as keys instead).
    ///
    /// # Errors
    ///
    /// [`ExportError::Serialization`] or [`ExportError::Render`] when writing
    /// the output fails.
    fn render(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<String>;

    /// Render and wrap the output with its format metadata
    fn render_schema(&self, tables: &[TableSpec], ctx: &RenderContext) -> ExportResult<RenderedSchema> {
        Ok(RenderedSchema {
            content: self.render(tables, ctx)?,
            format: self.format().to_string(),
            file_extension: self.file_extension().to_string(),
        })
    }
}

/// Non-dialect export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Json,
    Prisma,
    TypeScript,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Prisma, Self::TypeScript];

    /// Parse a format tag (case-insensitive); `ts` is accepted for TypeScript
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "prisma" => Some(Self::Prisma),
            "typescript" | "ts" => Some(Self::TypeScript),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Prisma => "prisma",
            Self::TypeScript => "typescript",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registry of dialect and export renderers
pub struct RendererRegistry {
    dialects: BTreeMap<DatabaseType, Box<dyn SchemaRenderer>>,
    exports: BTreeMap<ExportFormat, Box<dyn SchemaRenderer>>,
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            dialects: BTreeMap::new(),
            exports: BTreeMap::new(),
        }
    }

    /// Registry with every built-in renderer
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register_dialect(DatabaseType::MySql, MySqlRenderer);
        registry.register_dialect(DatabaseType::PostgreSql, PostgresRenderer);
        registry.register_dialect(DatabaseType::Sqlite, SqliteRenderer);
        registry.register_dialect(DatabaseType::MongoDb, MongoDbRenderer);
        registry.register_export(ExportFormat::Json, JsonExporter);
        registry.register_export(ExportFormat::Prisma, PrismaExporter);
        registry.register_export(ExportFormat::TypeScript, TypeScriptExporter);
        registry
    }

    pub fn register_dialect(
        &mut self,
        database_type: DatabaseType,
        renderer: impl SchemaRenderer + 'static,
    ) {
        self.dialects.insert(database_type, Box::new(renderer));
    }

    pub fn register_export(&mut self, format: ExportFormat, renderer: impl SchemaRenderer + 'static) {
        self.exports.insert(format, Box::new(renderer));
    }

    pub fn dialect(&self, database_type: DatabaseType) -> Option<&dyn SchemaRenderer> {
        self.dialects.get(&database_type).map(|r| &**r)
    }

    pub fn export(&self, format: ExportFormat) -> Option<&dyn SchemaRenderer> {
        self.exports.get(&format).map(|r| &**r)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RendererRegistry")
            .field("dialects", &self.dialects.keys().collect::<Vec<_>>())
            .field("exports", &self.exports.keys().collect::<Vec<_>>())
            .finish()
    }
}
