//! Models module
//!
//! Defines the table/field model shared by the analyzers, the domain templates
//! and every renderer. The model is built fresh for each run and never mutated
//! after construction.

pub mod enums;
pub mod field;
pub mod relationship;
pub mod result;
pub mod shape;
pub mod table;

pub use enums::{DatabaseType, PrimitiveType, WebsiteType};
pub use field::FieldSpec;
pub use relationship::Relationship;
pub use result::{SchemaMetadata, SchemaResult, count_fields};
pub use shape::{FieldShape, FileStructure};
pub use table::TableSpec;
