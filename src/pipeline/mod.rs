//! Schema generation pipeline
//!
//! Orchestrates one run end to end:
//!
//! 1. **Analyze**: read each file and infer its field structure (failures are
//!    logged and skipped)
//! 2. **Build**: select the domain template and apply the table prefix
//! 3. **Augment**: append the optional metadata and media tables
//! 4. **Validate**: check every table before anything is rendered
//! 5. **Render**: produce the schema text in the configured dialect
//!
//! # Example
//!
//! ```rust
//! use site_schema::analysis::FileDescriptor;
//! use site_schema::models::{DatabaseType, WebsiteType};
//! use site_schema::pipeline::{GeneratorConfig, SchemaGenerator};
//!
//! let files = vec![FileDescriptor::from_bytes("catalog.csv", "title,price\nWidget,9.99")];
//! let config = GeneratorConfig::new()
//!     .with_website_type(WebsiteType::Ecommerce)
//!     .with_database_type(DatabaseType::MySql);
//!
//! let result = SchemaGenerator::new().generate(&files, &config).unwrap();
//! assert!(result.table("products").is_some());
//! assert_eq!(result.metadata.files_analyzed, 1);
//! ```

mod config;
mod error;
mod generator;

pub use config::{DEFAULT_PROJECT_NAME, GeneratorConfig};
pub use error::{ConfigError, PipelineError, PipelineResult};
pub use generator::SchemaGenerator;
