//! CLI error type

use std::path::PathBuf;

use site_schema::{ConfigError, PipelineError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Message printed before exiting
    pub fn user_message(&self) -> String {
        match self {
            CliError::Pipeline(err) => err.user_message(),
            CliError::Config(err) => {
                format!("{err}\n\nHint: Config files must be .json, .yaml, .yml or .toml.")
            }
            CliError::FileReadError(path, message) => format!(
                "Failed to read {}: {message}\n\nHint: Check that the file exists and the path is correct.",
                path.display()
            ),
            _ => self.to_string(),
        }
    }
}
