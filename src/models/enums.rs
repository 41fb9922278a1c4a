//! Enumerations shared across the model, analyzers and renderers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive field type used throughout the table model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Integer,
    String,
    Text,
    Boolean,
    Date,
    Timestamp,
    Decimal,
    Json,
    Relation,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Integer => "integer",
            PrimitiveType::String => "string",
            PrimitiveType::Text => "text",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Date => "date",
            PrimitiveType::Timestamp => "timestamp",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Json => "json",
            PrimitiveType::Relation => "relation",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application domain selecting which curated table catalog is used
///
/// Unknown tags never fail: they resolve to [`WebsiteType::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebsiteType {
    Blog,
    Portfolio,
    Ecommerce,
    Documentation,
    Business,
    #[default]
    Custom,
}

impl WebsiteType {
    /// All domains, in catalog order
    pub const ALL: [WebsiteType; 6] = [
        WebsiteType::Blog,
        WebsiteType::Portfolio,
        WebsiteType::Ecommerce,
        WebsiteType::Documentation,
        WebsiteType::Business,
        WebsiteType::Custom,
    ];

    /// Resolve a domain tag, accepting common aliases case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "blog" | "content-site" | "content" => WebsiteType::Blog,
            "portfolio" => WebsiteType::Portfolio,
            "ecommerce" | "e-commerce" | "storefront" | "shop" | "store" => WebsiteType::Ecommerce,
            "documentation" | "docs" | "knowledge-base" | "wiki" => WebsiteType::Documentation,
            "business" | "corporate" | "corporate-site" | "company" => WebsiteType::Business,
            _ => WebsiteType::Custom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WebsiteType::Blog => "blog",
            WebsiteType::Portfolio => "portfolio",
            WebsiteType::Ecommerce => "ecommerce",
            WebsiteType::Documentation => "documentation",
            WebsiteType::Business => "business",
            WebsiteType::Custom => "custom",
        }
    }
}

impl From<String> for WebsiteType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<WebsiteType> for String {
    fn from(value: WebsiteType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for WebsiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target database dialect for the primary schema output
///
/// Unknown tags resolve to [`DatabaseType::MySql`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatabaseType {
    #[default]
    MySql,
    PostgreSql,
    Sqlite,
    MongoDb,
}

impl DatabaseType {
    pub const ALL: [DatabaseType; 4] = [
        DatabaseType::MySql,
        DatabaseType::PostgreSql,
        DatabaseType::Sqlite,
        DatabaseType::MongoDb,
    ];

    /// Resolve a dialect tag, accepting common aliases case-insensitively
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "postgresql" | "postgres" | "pg" => DatabaseType::PostgreSql,
            "sqlite" | "sqlite3" => DatabaseType::Sqlite,
            "mongodb" | "mongo" => DatabaseType::MongoDb,
            _ => DatabaseType::MySql,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseType::MySql => "mysql",
            DatabaseType::PostgreSql => "postgresql",
            DatabaseType::Sqlite => "sqlite",
            DatabaseType::MongoDb => "mongodb",
        }
    }
}

impl From<String> for DatabaseType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<DatabaseType> for String {
    fn from(value: DatabaseType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DatabaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
