use serde::Serialize;
use std::path::PathBuf;

/// A non-blank, non-comment line that is not a server directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MalformedLine {
    /// 1-based
    pub line_number: usize,
    pub content: String,
}

/// Outcome of a single pass over the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub domains: Vec<String>,
    /// Blank and comment lines
    pub ignored: usize,
    pub malformed: Vec<MalformedLine>,
    pub total_lines: usize,
}

impl Extraction {
    /// Domains extracted.
    pub fn processed(&self) -> usize {
        self.domains.len()
    }

    /// Malformed lines skipped.
    pub fn skipped(&self) -> usize {
        self.malformed.len()
    }
}

/// Everything reported after a successful conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub processed: usize,
    pub skipped: usize,
    pub ignored: usize,
    pub total_lines: usize,
    pub output_bytes: u64,
    pub malformed: Vec<MalformedLine>,
}

impl ConversionReport {
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        extraction: Extraction,
        output_bytes: u64,
    ) -> Self {
        Self {
            input_path,
            output_path,
            processed: extraction.processed(),
            skipped: extraction.skipped(),
            ignored: extraction.ignored,
            total_lines: extraction.total_lines,
            output_bytes,
            malformed: extraction.malformed,
        }
    }
}
