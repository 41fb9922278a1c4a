//! Type inference and identifier normalization for raw content
//!
//! These are the leaves of the pipeline: every content analyzer feeds raw
//! values through [`infer_type`] and raw keys through [`sanitize_field_name`].
//!
//! ## Example
//!
//! ```rust
//! use site_schema::inference::{infer_type, sanitize_field_name};
//! use site_schema::models::PrimitiveType;
//!
//! assert_eq!(sanitize_field_name("Unit Price ($)"), "unit_price");
//! assert_eq!(infer_type(Some("9.99")), PrimitiveType::Decimal);
//! assert_eq!(infer_type(Some("2024-01-15")), PrimitiveType::Date);
//! ```

mod formats;
mod infer;
mod sanitize;

pub use formats::{contains_date, is_date, is_numeric, is_timestamp};
pub use infer::{SHORT_TEXT_LIMIT, infer_type};
pub use sanitize::sanitize_field_name;
