//! Shared helpers for the SQL dialect renderers
//!
//! # Security
//!
//! All identifiers (table names, column names) are quoted and escaped, and
//! default values are emitted as escaped string literals. Internal quote
//! characters are escaped by doubling them according to SQL standards.

use crate::models::{DatabaseType, FieldSpec, PrimitiveType};

/// Quote and escape an identifier for `dialect`
///
/// - **MySQL**: backticks (`` `identifier` ``)
/// - **PostgreSQL**, **SQLite**: double quotes (`"identifier"`)
///
/// ```rust
/// use site_schema::export::sql::quote_identifier;
/// use site_schema::models::DatabaseType;
///
/// assert_eq!(quote_identifier("user`name", DatabaseType::MySql), "`user``name`");
/// assert_eq!(quote_identifier("posts", DatabaseType::PostgreSql), "\"posts\"");
/// ```
pub fn quote_identifier(identifier: &str, dialect: DatabaseType) -> String {
    match dialect {
        DatabaseType::MySql => format!("`{}`", identifier.replace('`', "``")),
        _ => format!("\"{}\"", identifier.replace('"', "\"\"")),
    }
}

/// Quote a default value as a single-quoted string literal
///
/// # Arguments
///
/// * `value` - The raw default value
/// * `dialect` - Target dialect; only MySQL changes the escaping
///
/// # Returns
///
/// The literal with embedded `'` doubled. MySQL treats `\` as an escape
/// character inside literals, so it is doubled there as well.
///
/// # Example
///
/// ```rust
/// use site_schema::export::sql::quote_literal;
/// use site_schema::models::DatabaseType;
///
/// assert_eq!(quote_literal("it's", DatabaseType::PostgreSql), "'it''s'");
/// assert_eq!(quote_literal("C:\\tmp", DatabaseType::MySql), "'C:\\\\tmp'");
/// ```
pub fn quote_literal(value: &str, dialect: DatabaseType) -> String {
    let escaped = match dialect {
        DatabaseType::MySql => value.replace('\\', "\\\\").replace('\'', "''"),
        _ => value.replace('\'', "''"),
    };
    format!("'{escaped}'")
}

/// `DEFAULT` clause for a column, if any
///
/// `implicit_now` is set by dialects whose timestamp type already defaults to
/// `CURRENT_TIMESTAMP`; such columns never get a second default.
pub fn default_clause(field: &FieldSpec, dialect: DatabaseType, implicit_now: bool) -> Option<String> {
    if implicit_now && field.field_type == PrimitiveType::Timestamp {
        return Some("DEFAULT CURRENT_TIMESTAMP".to_string());
    }
    field
        .default
        .as_deref()
        .map(|value| format!("DEFAULT {}", quote_literal(value, dialect)))
}

/// Comma-separated list of quoted identifiers
pub fn identifier_list<'a>(
    names: impl IntoIterator<Item = &'a str>,
    dialect: DatabaseType,
) -> String {
    names
        .into_iter()
        .map(|name| quote_identifier(name, dialect))
        .collect::<Vec<_>>()
        .join(", ")
}
