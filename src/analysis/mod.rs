//! Content analysis for uploaded files
//!
//! One analyzer per structural family, dispatched on the file extension:
//!
//! - `.json` - [`JsonAnalyzer`]
//! - `.csv` - [`CsvAnalyzer`]
//! - `.xml` - [`XmlAnalyzer`]
//! - `.md`, `.txt` and anything else - [`TextAnalyzer`]
//!
//! A file that cannot be read or parsed is logged and left out of the
//! aggregate; it never aborts the batch.
//!
//! ## Example
//!
//! ```rust
//! use site_schema::analysis::{FileDescriptor, analyze_files};
//!
//! let files = vec![
//!     FileDescriptor::from_bytes("people.csv", "name,age\nAlice,30"),
//!     FileDescriptor::from_bytes("broken.json", "{oops"),
//! ];
//! let analysis = analyze_files(&files);
//! assert_eq!(analysis.files_analyzed, 1);
//! assert!(analysis.common_fields.contains("age"));
//! ```

mod csv;
mod error;
mod file;
mod json;
mod text;
mod xml;

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::FileStructure;

pub use csv::CsvAnalyzer;
pub use error::AnalysisError;
pub use file::{ContentSource, FileDescriptor};
pub use json::{JsonAnalyzer, MAX_JSON_DEPTH};
pub use text::TextAnalyzer;
pub use xml::XmlAnalyzer;

/// Structural family handled by an analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerKind {
    Json,
    Csv,
    Xml,
    Text,
}

/// Turns one file's text into a field-name -> shape mapping
pub trait ContentAnalyzer: Send + Sync {
    fn kind(&self) -> AnalyzerKind;

    fn analyze(&self, content: &str) -> Result<FileStructure, AnalysisError>;
}

/// Pick the analyzer for a lower-cased, dot-prefixed extension
pub fn analyzer_for_extension(extension: &str) -> &'static dyn ContentAnalyzer {
    match extension {
        ".json" => &JsonAnalyzer,
        ".csv" => &CsvAnalyzer,
        ".xml" => &XmlAnalyzer,
        _ => &TextAnalyzer,
    }
}

/// Read and analyze a single file
pub fn analyze_file(file: &FileDescriptor) -> Result<FileStructure, AnalysisError> {
    let analyzer = analyzer_for_extension(&file.extension);
    let content = file.read_text()?;
    debug!(
        file = %file.original_name,
        analyzer = ?analyzer.kind(),
        size = file.size,
        "Analyzing file"
    );
    analyzer.analyze(&content)
}

/// A file whose analysis failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisFailure {
    pub original_name: String,
    pub error: AnalysisError,
}

/// Aggregate of all successful per-file analyses in a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentAnalysis {
    pub files_analyzed: usize,
    /// Union of top-level field names across files
    pub common_fields: BTreeSet<String>,
    /// Original file name -> discovered structure
    pub file_structures: BTreeMap<String, FileStructure>,
    /// Kept for logging; not part of the generated result
    pub failures: Vec<AnalysisFailure>,
}

impl ContentAnalysis {
    fn merge(&mut self, file: &FileDescriptor, outcome: Result<FileStructure, AnalysisError>) {
        match outcome {
            Ok(structure) => {
                self.files_analyzed += 1;
                self.common_fields.extend(structure.keys().cloned());
                self.file_structures
                    .insert(file.original_name.clone(), structure);
            }
            Err(error) => {
                warn!(file = %file.original_name, error = %error, "Skipping file");
                self.failures.push(AnalysisFailure {
                    original_name: file.original_name.clone(),
                    error,
                });
            }
        }
    }
}

/// Analyze every file and merge the results
///
/// With the `parallel` feature the files are read and analyzed concurrently;
/// merging always happens on the calling thread, in input order.
pub fn analyze_files(files: &[FileDescriptor]) -> ContentAnalysis {
    #[cfg(feature = "parallel")]
    let outcomes: Vec<_> = files.par_iter().map(analyze_file).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Vec<_> = files.iter().map(analyze_file).collect();

    let mut analysis = ContentAnalysis::default();
    for (file, outcome) in files.iter().zip(outcomes) {
        analysis.merge(file, outcome);
    }
    analysis
}
