//! Free-text analyzer (Markdown, plain text and unknown formats)

use crate::inference::contains_date;
use crate::models::{FieldShape, FileStructure, PrimitiveType};

use super::error::AnalysisError;
use super::{AnalyzerKind, ContentAnalyzer};

/// Emits an article-like baseline and adds fields hinted at by the text
#[derive(Debug, Default, Clone, Copy)]
pub struct TextAnalyzer;

impl ContentAnalyzer for TextAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Text
    }

    fn analyze(&self, content: &str) -> Result<FileStructure, AnalysisError> {
        let mut structure = FileStructure::new();
        structure.insert("title".into(), FieldShape::new(PrimitiveType::String, true));
        structure.insert("content".into(), FieldShape::new(PrimitiveType::Text, true));
        structure.insert("excerpt".into(), FieldShape::new(PrimitiveType::Text, false));

        if content.contains('@') && content.contains('.') {
            structure.insert(
                "author_email".into(),
                FieldShape::new(PrimitiveType::String, false),
            );
        }

        if contains_date(content) {
            structure.insert(
                "published_date".into(),
                FieldShape::new(PrimitiveType::Date, false),
            );
        }

        Ok(structure)
    }
}
