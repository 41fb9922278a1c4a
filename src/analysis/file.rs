//! Uploaded file descriptors

use std::path::{Path, PathBuf};

use super::error::AnalysisError;

/// Where a file's bytes live
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

/// One uploaded item, consumed once by the analyzers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub original_name: String,
    /// Lower-cased, dot-prefixed (`.json`), empty when the name has none
    pub extension: String,
    pub size: u64,
    pub source: ContentSource,
}

impl FileDescriptor {
    /// Describe a file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path).map_err(|e| AnalysisError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let original_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self {
            extension: normalize_extension(&original_name),
            original_name,
            size: metadata.len(),
            source: ContentSource::Path(path.to_path_buf()),
        })
    }

    /// Describe an in-memory upload
    pub fn from_bytes(original_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let original_name = original_name.into();
        let bytes = bytes.into();
        Self {
            extension: normalize_extension(&original_name),
            original_name,
            size: bytes.len() as u64,
            source: ContentSource::Memory(bytes),
        }
    }

    /// Override the declared extension (normalized to lower-case, dot-prefixed)
    pub fn with_extension(mut self, extension: &str) -> Self {
        let ext = extension.trim().trim_start_matches('.').to_lowercase();
        self.extension = if ext.is_empty() {
            String::new()
        } else {
            format!(".{}", ext)
        };
        self
    }

    /// Read the whole content as text; invalid UTF-8 is replaced
    pub fn read_text(&self) -> Result<String, AnalysisError> {
        match &self.source {
            ContentSource::Path(path) => {
                let bytes = std::fs::read(path).map_err(|e| AnalysisError::Io {
                    path: path.clone(),
                    message: e.to_string(),
                })?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            ContentSource::Memory(bytes) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        }
    }
}

fn normalize_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
