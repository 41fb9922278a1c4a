//! Site Schema - content-driven database schema generation
//!
//! Turns a batch of uploaded content files (JSON, CSV, XML, Markdown or plain
//! text) plus an application domain into a ready-to-run database schema:
//! - Content analysis and type inference
//! - Curated table catalogs per domain (blog, portfolio, e-commerce,
//!   documentation, business, custom)
//! - SQL for MySQL, PostgreSQL and SQLite, or MongoDB validators
//! - JSON, Prisma and TypeScript exports

pub mod analysis;
pub mod export;
pub mod inference;
pub mod models;
pub mod pipeline;
pub mod templates;
pub mod validation;

pub use analysis::{AnalysisError, ContentAnalysis, FileDescriptor, analyze_files};
pub use export::{
    ExportError, ExportFormat, RenderContext, RenderedSchema, RendererRegistry, SchemaRenderer,
};
pub use inference::{infer_type, sanitize_field_name};
pub use models::{
    DatabaseType, FieldSpec, PrimitiveType, SchemaMetadata, SchemaResult, TableSpec, WebsiteType,
};
pub use pipeline::{ConfigError, GeneratorConfig, PipelineError, PipelineResult, SchemaGenerator};
pub use templates::{DomainTemplate, TemplateCatalog};
pub use validation::{TableValidationError, TableValidator};
