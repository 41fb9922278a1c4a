//! Generator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::models::{DatabaseType, WebsiteType};

pub const DEFAULT_PROJECT_NAME: &str = "My Website";

/// Flat configuration record for one generation run
///
/// Keys are camelCase on the wire (`websiteType`, `databaseType`,
/// `tablePrefix`, `includeMetadata`, `includeImages`, `projectName`). Missing
/// keys take their defaults and unknown domain/dialect tags resolve to their
/// fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    pub website_type: WebsiteType,
    pub database_type: DatabaseType,
    pub table_prefix: String,
    pub include_metadata: bool,
    pub include_images: bool,
    pub project_name: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            website_type: WebsiteType::default(),
            database_type: DatabaseType::default(),
            table_prefix: String::new(),
            include_metadata: false,
            include_images: false,
            project_name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_website_type(mut self, website_type: WebsiteType) -> Self {
        self.website_type = website_type;
        self
    }

    pub fn with_database_type(mut self, database_type: DatabaseType) -> Self {
        self.database_type = database_type;
        self
    }

    pub fn with_table_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.table_prefix = prefix.into();
        self
    }

    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Load from a JSON, YAML or TOML file, chosen by extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        match extension.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(e.to_string())),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            #[cfg(feature = "toml-config")]
            "toml" => toml::from_str(&content).map_err(|e| parse_error(e.to_string())),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}
