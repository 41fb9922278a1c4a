//! Domain templates: curated table catalogs per application domain
//!
//! Each domain is a [`DomainTemplate`] strategy. [`TemplateCatalog`] holds one
//! strategy per [`WebsiteType`]; it is built once (usually at start-up) and
//! passed by reference into every run. Unknown domains resolve to the
//! [`WebsiteType::Custom`] template.
//!
//! The catalogs are reference data: content analysis does not change them.
//!
//! ## Example
//!
//! ```rust
//! use site_schema::analysis::ContentAnalysis;
//! use site_schema::models::WebsiteType;
//! use site_schema::templates::TemplateCatalog;
//!
//! let catalog = TemplateCatalog::builtin();
//! let tables = catalog
//!     .get(WebsiteType::Ecommerce)
//!     .unwrap()
//!     .build_tables(&ContentAnalysis::default(), "shop_");
//! assert_eq!(tables[2].name, "shop_products");
//! ```

mod blog;
mod business;
mod custom;
mod documentation;
mod ecommerce;
pub mod features;
mod portfolio;

use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::ContentAnalysis;
use crate::models::{FieldSpec, PrimitiveType, TableSpec, WebsiteType};

pub use features::{apply_features, media_table, metadata_table};

/// Strategy producing the table set for one application domain
pub trait DomainTemplate: Send + Sync {
    fn website_type(&self) -> WebsiteType;

    /// Unprefixed reference tables, in output order
    fn tables(&self) -> &[TableSpec];

    /// Tables for one run, with `prefix` applied to every name
    fn build_tables(&self, _analysis: &ContentAnalysis, prefix: &str) -> Vec<TableSpec> {
        self.tables().iter().map(|t| t.with_prefix(prefix)).collect()
    }
}

/// A domain template backed by a fixed table list
#[derive(Debug, Clone)]
pub struct CatalogTemplate {
    website_type: WebsiteType,
    tables: Vec<TableSpec>,
}

impl CatalogTemplate {
    pub fn new(website_type: WebsiteType, tables: Vec<TableSpec>) -> Self {
        Self {
            website_type,
            tables,
        }
    }
}

impl DomainTemplate for CatalogTemplate {
    fn website_type(&self) -> WebsiteType {
        self.website_type
    }

    fn tables(&self) -> &[TableSpec] {
        &self.tables
    }
}

/// Immutable registry of domain templates
pub struct TemplateCatalog {
    templates: BTreeMap<WebsiteType, Box<dyn DomainTemplate>>,
}

impl TemplateCatalog {
    /// Catalog with no templates; register at least a `Custom` one
    pub fn empty() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Catalog with the six built-in domains
    pub fn builtin() -> Self {
        Self::empty()
            .with_template(blog::template())
            .with_template(portfolio::template())
            .with_template(ecommerce::template())
            .with_template(documentation::template())
            .with_template(business::template())
            .with_template(custom::template())
    }

    /// Add or replace the template for its domain
    pub fn with_template(mut self, template: impl DomainTemplate + 'static) -> Self {
        self.register(template);
        self
    }

    pub fn register(&mut self, template: impl DomainTemplate + 'static) {
        let website_type = template.website_type();
        if self
            .templates
            .insert(website_type, Box::new(template))
            .is_some()
        {
            debug!(website_type = %website_type, "Replaced domain template");
        }
    }

    /// Template for `website_type`, falling back to the custom template
    ///
    /// Returns `None` only when neither is registered.
    pub fn get(&self, website_type: WebsiteType) -> Option<&dyn DomainTemplate> {
        self.templates
            .get(&website_type)
            .or_else(|| self.templates.get(&WebsiteType::Custom))
            .map(|t| &**t)
    }

    pub fn website_types(&self) -> impl Iterator<Item = WebsiteType> + '_ {
        self.templates.keys().copied()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for TemplateCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateCatalog")
            .field("website_types", &self.templates.keys().collect::<Vec<_>>())
            .finish()
    }
}

// Catalog shorthands

pub(crate) fn int(name: &str) -> FieldSpec {
    FieldSpec::new(name, PrimitiveType::Integer)
}

pub(crate) fn string(name: &str, length: u32) -> FieldSpec {
    FieldSpec::new(name, PrimitiveType::String).with_length(length)
}

pub(crate) fn text(name: &str) -> FieldSpec {
    FieldSpec::new(name, PrimitiveType::Text)
}

pub(crate) fn money(name: &str) -> FieldSpec {
    FieldSpec::new(name, PrimitiveType::Decimal).with_precision(10, 2)
}

pub(crate) fn flag(name: &str, default: &str) -> FieldSpec {
    FieldSpec::new(name, PrimitiveType::Boolean).with_default(default)
}
