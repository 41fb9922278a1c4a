//! Error types for content analysis

use std::path::PathBuf;

use thiserror::Error;

/// Failure analyzing one file; recovered by skipping that file
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// File could not be read
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },

    /// Structured-object content did not parse
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Nothing to analyze
    #[error("No content to analyze")]
    Empty,
}

impl From<serde_json::Error> for AnalysisError {
    fn from(e: serde_json::Error) -> Self {
        AnalysisError::JsonParse(e.to_string())
    }
}
