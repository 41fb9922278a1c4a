//! Schema generation run

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info, info_span};

use super::config::GeneratorConfig;
use super::error::{PipelineError, PipelineResult};
use crate::analysis::{ContentAnalysis, FileDescriptor, analyze_files};
use crate::export::{ExportFormat, RenderContext, RenderedSchema, RendererRegistry};
use crate::models::{SchemaMetadata, SchemaResult, TableSpec, count_fields};
use crate::templates::{TemplateCatalog, apply_features};
use crate::validation::TableValidator;

/// Runs analysis, table building, validation and rendering
///
/// Holds only immutable state, so one generator can serve any number of
/// concurrent runs.
#[derive(Debug, Default)]
pub struct SchemaGenerator {
    catalog: TemplateCatalog,
    renderers: RendererRegistry,
    validator: TableValidator,
}

impl SchemaGenerator {
    /// Generator with the built-in catalog and renderers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn with_renderers(mut self, renderers: RendererRegistry) -> Self {
        self.renderers = renderers;
        self
    }

    /// Domain templates this generator builds tables from
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Generate a schema stamped with the current time
    pub fn generate(
        &self,
        files: &[FileDescriptor],
        config: &GeneratorConfig,
    ) -> PipelineResult<SchemaResult> {
        self.generate_at(files, config, Utc::now())
    }

    /// Generate a schema stamped with `generated_at`
    pub fn generate_at(
        &self,
        files: &[FileDescriptor],
        config: &GeneratorConfig,
        generated_at: DateTime<Utc>,
    ) -> PipelineResult<SchemaResult> {
        let _span = info_span!(
            "schema_generate",
            website_type = %config.website_type,
            database_type = %config.database_type,
            files = files.len()
        )
        .entered();
        let start = Instant::now();

        let analysis = analyze_files(files);
        debug!(
            files_analyzed = analysis.files_analyzed,
            failures = analysis.failures.len(),
            common_fields = analysis.common_fields.len(),
            "Content analysis complete"
        );

        let tables = self.build_tables(&analysis, config)?;

        let renderer = self
            .renderers
            .dialect(config.database_type)
            .ok_or_else(|| PipelineError::Renderer(config.database_type.to_string()))?;
        let ctx = RenderContext::new(config.project_name.clone(), generated_at);
        let sql = renderer.render(&tables, &ctx)?;

        let total_fields = count_fields(&tables);
        info!(
            tables = tables.len(),
            total_fields,
            duration_ms = start.elapsed().as_millis() as u64,
            "Schema generated"
        );

        Ok(SchemaResult {
            sql,
            tables,
            total_fields,
            metadata: SchemaMetadata {
                project_name: config.project_name.clone(),
                website_type: config.website_type,
                database_type: config.database_type,
                generated_at,
                files_analyzed: analysis.files_analyzed,
                common_fields: analysis.common_fields.into_iter().collect(),
                file_structures: analysis.file_structures,
            },
            relationships: Vec::new(),
        })
    }

    /// Domain tables plus feature tables, validated
    pub fn build_tables(
        &self,
        analysis: &ContentAnalysis,
        config: &GeneratorConfig,
    ) -> PipelineResult<Vec<TableSpec>> {
        let template = self
            .catalog
            .get(config.website_type)
            .ok_or(PipelineError::Template(config.website_type))?;

        let mut tables = template.build_tables(analysis, &config.table_prefix);
        apply_features(
            &mut tables,
            &config.table_prefix,
            config.include_metadata,
            config.include_images,
        );

        self.validator.validate_all(&tables)?;
        Ok(tables)
    }

    /// Render an existing result into an alternate format
    pub fn export(
        &self,
        result: &SchemaResult,
        format: ExportFormat,
        project: &str,
    ) -> PipelineResult<RenderedSchema> {
        let renderer = self
            .renderers
            .export(format)
            .ok_or_else(|| PipelineError::Renderer(format.to_string()))?;
        let ctx = RenderContext::new(project, result.metadata.generated_at);
        debug!(format = %format, tables = result.tables.len(), "Exporting schema");
        Ok(renderer.render_schema(&result.tables, &ctx)?)
    }
}
