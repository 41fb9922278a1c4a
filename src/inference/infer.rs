//! Primitive type inference for raw textual values

use crate::models::PrimitiveType;

use super::formats::{is_date, is_numeric, is_timestamp};

/// Values longer than this (in UTF-16 code units) are long text
pub const SHORT_TEXT_LIMIT: usize = 255;

/// Decide the most specific primitive type for a raw value
///
/// Rules are applied in order: absent, boolean, numeric, date, timestamp,
/// long text, short text.
///
/// ```rust
/// use site_schema::inference::infer_type;
/// use site_schema::models::PrimitiveType;
///
/// assert_eq!(infer_type(Some("3.14")), PrimitiveType::Decimal);
/// assert_eq!(infer_type(None), PrimitiveType::String);
/// ```
pub fn infer_type(value: Option<&str>) -> PrimitiveType {
    let Some(value) = value else {
        return PrimitiveType::String;
    };

    if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        return PrimitiveType::Boolean;
    }

    if is_numeric(value) {
        return if value.contains('.') {
            PrimitiveType::Decimal
        } else {
            PrimitiveType::Integer
        };
    }

    if is_date(value) {
        return PrimitiveType::Date;
    }

    if is_timestamp(value) {
        return PrimitiveType::Timestamp;
    }

    if value.encode_utf16().count() > SHORT_TEXT_LIMIT {
        return PrimitiveType::Text;
    }

    PrimitiveType::String
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        assert_eq!(infer_type(Some("true")), PrimitiveType::Boolean);
        assert_eq!(infer_type(Some("FALSE")), PrimitiveType::Boolean);
        assert_eq!(infer_type(Some("42")), PrimitiveType::Integer);
        assert_eq!(infer_type(Some("3.14")), PrimitiveType::Decimal);
        assert_eq!(infer_type(Some("2024-01-15")), PrimitiveType::Date);
        assert_eq!(
            infer_type(Some("2024-01-15T10:00:00")),
            PrimitiveType::Timestamp
        );
        assert_eq!(infer_type(Some(&"a".repeat(300))), PrimitiveType::Text);
        assert_eq!(infer_type(Some("hello")), PrimitiveType::String);
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(infer_type(None), PrimitiveType::String);
        assert_eq!(infer_type(Some("")), PrimitiveType::String);
        assert_eq!(infer_type(Some("   ")), PrimitiveType::String);
    }

    #[test]
    fn test_boolean_requires_exact_match() {
        assert_eq!(infer_type(Some(" true")), PrimitiveType::String);
        assert_eq!(infer_type(Some("yes")), PrimitiveType::String);
    }

    #[test]
    fn test_numeric_edges() {
        assert_eq!(infer_type(Some(" 12 ")), PrimitiveType::Integer);
        assert_eq!(infer_type(Some("-0.5")), PrimitiveType::Decimal);
        assert_eq!(infer_type(Some("1,234")), PrimitiveType::String);
    }

    #[test]
    fn test_length_boundary_counts_utf16_units() {
        assert_eq!(infer_type(Some(&"a".repeat(255))), PrimitiveType::String);
        assert_eq!(infer_type(Some(&"a".repeat(256))), PrimitiveType::Text);
        // 128 astral chars = 256 UTF-16 code units
        assert_eq!(infer_type(Some(&"😀".repeat(128))), PrimitiveType::Text);
    }
}
