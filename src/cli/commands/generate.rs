//! Generate command implementation

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use site_schema::{
    DatabaseType, ExportFormat, FileDescriptor, GeneratorConfig, SchemaGenerator, WebsiteType,
};
use tracing::debug;

use crate::error::CliError;
use crate::output::format_summary;

/// What the generate command writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Schema in the selected database dialect
    Sql,
    Json,
    Prisma,
    #[value(name = "typescript", alias = "ts")]
    TypeScript,
    /// Full result (tables, metadata, schema text) as JSON
    Report,
}

/// Arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Content files to analyze (.json, .csv, .xml, .md, .txt)
    pub files: Vec<PathBuf>,

    /// Config file (.json, .yaml, .yml or .toml); flags override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Application domain (blog, portfolio, ecommerce, documentation, business, custom)
    #[arg(short = 't', long)]
    pub website_type: Option<String>,

    /// Database dialect (mysql, postgresql, sqlite, mongodb)
    #[arg(short, long)]
    pub database: Option<String>,

    /// Prefix for every table name
    #[arg(long)]
    pub prefix: Option<String>,

    /// Add the metadata table
    #[arg(long)]
    pub metadata: bool,

    /// Add the media table
    #[arg(long)]
    pub images: bool,

    /// Project name used in the header
    #[arg(long)]
    pub project: Option<String>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Sql)]
    pub format: OutputFormat,

    /// Output file path (stdout if not provided)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Load the config file (if any) and apply flag overrides
pub fn resolve_config(args: &GenerateArgs) -> Result<GeneratorConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(tag) = &args.website_type {
        config.website_type = WebsiteType::from_tag(tag);
    }
    if let Some(tag) = &args.database {
        config.database_type = DatabaseType::from_tag(tag);
    }
    if let Some(prefix) = &args.prefix {
        config.table_prefix = prefix.clone();
    }
    if let Some(project) = &args.project {
        config.project_name = project.clone();
    }
    config.include_metadata |= args.metadata;
    config.include_images |= args.images;
    Ok(config)
}

/// Handle the `generate` command
pub fn handle_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let config = resolve_config(args)?;
    debug!(?config, "Resolved configuration");

    let files = args
        .files
        .iter()
        .map(|path| {
            FileDescriptor::from_path(path)
                .map_err(|e| CliError::FileReadError(path.clone(), e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let generator = SchemaGenerator::new();
    let result = generator.generate(&files, &config)?;

    let content = match args.format {
        OutputFormat::Sql => result.sql.clone(),
        OutputFormat::Report => serde_json::to_string_pretty(&result)? + "\n",
        OutputFormat::Json => {
            generator
                .export(&result, ExportFormat::Json, &config.project_name)?
                .content
        }
        OutputFormat::Prisma => {
            generator
                .export(&result, ExportFormat::Prisma, &config.project_name)?
                .content
        }
        OutputFormat::TypeScript => {
            generator
                .export(&result, ExportFormat::TypeScript, &config.project_name)?
                .content
        }
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, &content)
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    eprint!("{}", format_summary(&result));
    Ok(())
}
