//! Tabular (delimited text) analyzer
//!
//! Splits naively on newlines and commas; quoted fields containing commas are
//! not supported.

use crate::inference::{infer_type, sanitize_field_name};
use crate::models::{FieldShape, FileStructure, PrimitiveType};

use super::error::AnalysisError;
use super::{AnalyzerKind, ContentAnalyzer};

/// Infers fields from a header row and refines types from the first data row
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvAnalyzer;

impl ContentAnalyzer for CsvAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Csv
    }

    fn analyze(&self, content: &str) -> Result<FileStructure, AnalysisError> {
        let mut lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty());

        let header = lines.next().ok_or(AnalysisError::Empty)?;
        let headers: Vec<String> = header.split(',').map(sanitize_field_name).collect();

        let mut structure = FileStructure::new();
        for name in headers.iter().filter(|n| !n.is_empty()) {
            structure.insert(name.clone(), FieldShape::new(PrimitiveType::String, false));
        }

        if let Some(sample) = lines.next() {
            let values: Vec<&str> = sample.split(',').map(str::trim).collect();
            for (index, name) in headers.iter().enumerate() {
                if let Some(shape) = structure.get_mut(name) {
                    shape.field_type = infer_type(values.get(index).copied());
                }
            }
        }

        Ok(structure)
    }
}
