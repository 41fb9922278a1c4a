//! Error types for schema generation
//!
//! Per-file analysis failures never reach this type; they are recorded in the
//! analysis summary. Everything here aborts the run without a partial result.

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::models::WebsiteType;
use crate::validation::TableValidationError;

/// Errors loading a [`GeneratorConfig`](super::GeneratorConfig) file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error with {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Errors that abort a generation run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Table validation failed: {0}")]
    Validation(#[from] TableValidationError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No template registered for '{0}'")]
    Template(WebsiteType),

    #[error("No renderer registered for '{0}'")]
    Renderer(String),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;

impl PipelineError {
    /// User-facing message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::Config(err) => {
                format!("{err}\n\nHint: Config files must be .json, .yaml, .yml or .toml.")
            }
            PipelineError::Template(website_type) => format!(
                "No template registered for '{website_type}'\n\nHint: Register a custom template as a fallback."
            ),
            _ => self.to_string(),
        }
    }
}
