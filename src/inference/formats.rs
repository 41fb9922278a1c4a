//! Pattern detection for raw string values

use once_cell::sync::Lazy;
use regex::Regex;

// Regex patterns for format detection
static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

// Prefix match: anything after the seconds is ignored
static TIMESTAMP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}").unwrap());

static EMBEDDED_DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// `YYYY-MM-DD` and nothing else
pub fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// Starts with `YYYY-MM-DD` then `T` or a space then `HH:MM:SS`
pub fn is_timestamp(value: &str) -> bool {
    TIMESTAMP_REGEX.is_match(value)
}

/// A `YYYY-MM-DD` run anywhere in the text
pub fn contains_date(text: &str) -> bool {
    EMBEDDED_DATE_REGEX.is_match(text)
}

/// Plain decimal notation after trimming
///
/// Accepts an optional sign, at most one `.` and an optional exponent.
/// The empty string, thousands separators, underscores, hex literals and
/// `Infinity`/`NaN` are rejected.
pub fn is_numeric(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && NUMERIC_REGEX.is_match(value)
}
