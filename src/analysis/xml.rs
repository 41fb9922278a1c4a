//! Markup analyzer for simple tag-delimited content

use once_cell::sync::Lazy;
use regex::Regex;

use crate::inference::{infer_type, sanitize_field_name};
use crate::models::{FieldShape, FileStructure};

use super::error::AnalysisError;
use super::{AnalyzerKind, ContentAnalyzer};

// The regex crate has no backreferences, so open/close names are compared after matching
static ELEMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<([A-Za-z_][\w.\-]*)>([^<]+)</([A-Za-z_][\w.\-]*)>").unwrap()
});

/// Collects `<tag>text</tag>` leaf elements; the first occurrence of a tag wins
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlAnalyzer;

impl ContentAnalyzer for XmlAnalyzer {
    fn kind(&self) -> AnalyzerKind {
        AnalyzerKind::Xml
    }

    fn analyze(&self, content: &str) -> Result<FileStructure, AnalysisError> {
        let mut structure = FileStructure::new();

        for caps in ELEMENT_REGEX.captures_iter(content) {
            if caps[1] != caps[3] {
                continue;
            }
            let name = sanitize_field_name(&caps[1]);
            if name.is_empty() {
                continue;
            }
            let text = caps[2].trim();
            structure
                .entry(name)
                .or_insert_with(|| FieldShape::new(infer_type(Some(text)), false));
        }

        Ok(structure)
    }
}
