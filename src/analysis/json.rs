//! Structured-object (JSON) analyzer

use serde_json::Value;

use crate::inference::{infer_type, sanitize_field_name};
use crate::models::{FieldShape, FileStructure, PrimitiveType};

use super::error::AnalysisError;
use super::{AnalyzerKind, ContentAnalyzer};

/// Deepest level that is still inspected; deeper values yield nothing
pub const MAX_JSON_DEPTH: usize = 3;

/// Infers fields from a JSON document
///
/// Arrays are represented by their first element. Object-valued fields become
/// `json`, array-valued fields become `relation` with a nested structure.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAnalyzer;

impl ContentAnalyzer for JsonAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Json
    }

    fn analyze(&self, content: &str) -> Result<FileStructure, AnalysisError> {
        let value: Value = serde_json::from_str(content)?;
        Ok(analyze_value(&value, 0))
    }
}

fn analyze_value(value: &Value, depth: usize) -> FileStructure {
    let mut structure = FileStructure::new();
    if depth > MAX_JSON_DEPTH {
        return structure;
    }

    match value {
        Value::Array(items) => {
            if let Some(first) = items.first() {
                return analyze_value(first, depth + 1);
            }
        }
        Value::Object(map) => {
            for (key, field) in map {
                let name = sanitize_field_name(key);
                if name.is_empty() {
                    continue;
                }
                let shape = match field {
                    Value::Array(_) => {
                        FieldShape::relation(name.clone(), analyze_value(field, depth + 1))
                    }
                    Value::Object(_) => FieldShape::new(PrimitiveType::Json, false),
                    Value::Null => FieldShape::new(infer_type(None), false),
                    Value::String(s) => FieldShape::new(infer_type(Some(s)), true),
                    other => FieldShape::new(infer_type(Some(&other.to_string())), true),
                };
                structure.insert(name, shape);
            }
        }
        _ => {}
    }

    structure
}
