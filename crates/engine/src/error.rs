use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Input file '{}' does not exist", .path.display())]
    MissingInput { path: PathBuf },

    #[error("Failed to read file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Only raised in strict mode; otherwise malformed lines are collected.
    #[error("Line {line_number} does not match the server directive pattern: {content}")]
    MalformedLine { line_number: usize, content: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
