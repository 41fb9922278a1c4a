//! Field model for the schema

use serde::{Deserialize, Serialize};

use super::enums::PrimitiveType;

/// Default width for `String` fields without an explicit length
pub const DEFAULT_STRING_LENGTH: u32 = 255;
/// Default precision/scale for `Decimal` fields
pub const DEFAULT_DECIMAL_PRECISION: u8 = 10;
pub const DEFAULT_DECIMAL_SCALE: u8 = 2;

/// A single column/property of a table
///
/// Fields are assembled with a small builder:
///
/// ```rust
/// use site_schema::models::{FieldSpec, PrimitiveType};
///
/// let slug = FieldSpec::new("slug", PrimitiveType::String)
///     .required()
///     .unique()
///     .with_length(100);
/// assert_eq!(slug.effective_length(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Sanitized identifier (`[a-z0-9_]`)
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: PrimitiveType,
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub primary_key: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub auto_increment: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique: bool,
    /// Literal default value, rendered quoted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Max width, `String` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,
    /// Target table, `Relation` only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_table: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl FieldSpec {
    /// Create an optional field with no modifiers
    pub fn new(name: impl Into<String>, field_type: PrimitiveType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            primary_key: false,
            auto_increment: false,
            unique: false,
            default: None,
            length: None,
            precision: None,
            scale: None,
            related_table: None,
        }
    }

    /// Surrogate key: required auto-incrementing integer `id`
    pub fn id() -> Self {
        Self::new("id", PrimitiveType::Integer)
            .required()
            .primary_key()
            .auto_increment()
    }

    pub fn created_at() -> Self {
        Self::new("created_at", PrimitiveType::Timestamp).required()
    }

    pub fn updated_at() -> Self {
        Self::new("updated_at", PrimitiveType::Timestamp)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_precision(mut self, precision: u8, scale: u8) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn references(mut self, table: impl Into<String>) -> Self {
        self.related_table = Some(table.into());
        self
    }

    /// True for the surrogate key shape (`primary_key` + `auto_increment`)
    pub fn is_identity(&self) -> bool {
        self.primary_key && self.auto_increment
    }

    pub fn effective_length(&self) -> u32 {
        self.length.unwrap_or(DEFAULT_STRING_LENGTH)
    }

    pub fn effective_precision(&self) -> (u8, u8) {
        (
            self.precision.unwrap_or(DEFAULT_DECIMAL_PRECISION),
            self.scale.unwrap_or(DEFAULT_DECIMAL_SCALE),
        )
    }
}
