//! Table validation
//!
//! Checks the structural invariants every renderer relies on: unique field
//! names, at most one auto-increment field, sanitized identifiers and
//! modifiers that make sense for the field's type.

use std::collections::HashSet;

use thiserror::Error;

use crate::inference::sanitize_field_name;
use crate::models::{PrimitiveType, TableSpec};

/// Structural problem found in a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableValidationError {
    #[error("Table '{table}' has no fields")]
    EmptyTable { table: String },

    #[error("Table '{table}' is defined more than once")]
    DuplicateTable { table: String },

    #[error("Duplicate field '{field}' in table '{table}'")]
    DuplicateField { table: String, field: String },

    #[error("Table '{table}' has more than one auto-increment field")]
    MultipleAutoIncrement { table: String },

    #[error("Invalid field name '{field}' in table '{table}'")]
    InvalidFieldName { table: String, field: String },

    #[error("Invalid modifier on '{table}.{field}': {reason}")]
    InvalidModifier {
        table: String,
        field: String,
        reason: String,
    },
}

/// Table validator
#[derive(Debug, Default, Clone, Copy)]
pub struct TableValidator;

impl TableValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single table, stopping at the first problem
    pub fn validate(&self, table: &TableSpec) -> Result<(), TableValidationError> {
        if table.name.is_empty() || table.fields.is_empty() {
            return Err(TableValidationError::EmptyTable {
                table: table.name.clone(),
            });
        }

        let mut seen = HashSet::new();
        let mut auto_increment = 0usize;

        for field in &table.fields {
            if field.name.is_empty() || sanitize_field_name(&field.name) != field.name {
                return Err(TableValidationError::InvalidFieldName {
                    table: table.name.clone(),
                    field: field.name.clone(),
                });
            }
            if !seen.insert(field.name.as_str()) {
                return Err(TableValidationError::DuplicateField {
                    table: table.name.clone(),
                    field: field.name.clone(),
                });
            }

            let invalid = |reason: &str| TableValidationError::InvalidModifier {
                table: table.name.clone(),
                field: field.name.clone(),
                reason: reason.to_string(),
            };

            if field.auto_increment {
                auto_increment += 1;
                if field.field_type != PrimitiveType::Integer {
                    return Err(invalid("auto increment requires an integer field"));
                }
            }
            if let Some(length) = field.length {
                if field.field_type != PrimitiveType::String {
                    return Err(invalid("length applies to string fields only"));
                }
                if length == 0 {
                    return Err(invalid("length must be positive"));
                }
            }
            if field.precision.is_some() || field.scale.is_some() {
                if field.field_type != PrimitiveType::Decimal {
                    return Err(invalid("precision applies to decimal fields only"));
                }
                let (precision, scale) = field.effective_precision();
                if precision == 0 || scale > precision {
                    return Err(invalid("scale must not exceed a positive precision"));
                }
            }
            if field.related_table.is_some() && field.field_type != PrimitiveType::Relation {
                return Err(invalid("related table applies to relation fields only"));
            }
        }

        if auto_increment > 1 {
            return Err(TableValidationError::MultipleAutoIncrement {
                table: table.name.clone(),
            });
        }
        Ok(())
    }

    /// Validate every table and reject repeated table names
    pub fn validate_all(&self, tables: &[TableSpec]) -> Result<(), TableValidationError> {
        let mut names = HashSet::new();
        for table in tables {
            self.validate(table)?;
            if !names.insert(table.name.as_str()) {
                return Err(TableValidationError::DuplicateTable {
                    table: table.name.clone(),
                });
            }
        }
        Ok(())
    }
}
