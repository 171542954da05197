//! Error types for annotation document handling

use std::fmt;

/// Errors that can occur while obtaining or rendering an annotation document
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotError {
    /// The external annotator failed. Fatal: the run is never retried.
    Annotator(String),
    /// A document violates the annotation model invariants (length-mismatched
    /// layers, out-of-range indices). Reported instead of emitting corrupt output.
    MalformedDocument(String),
    /// A document file could not be parsed as JSON or YAML.
    Parse(String),
    /// An underlying I/O operation failed.
    Io(String),
}

impl std::error::Error for AnnotError {}

impl fmt::Display for AnnotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotError::Annotator(msg) => write!(f, "Annotator error: {}", msg),
            AnnotError::MalformedDocument(msg) => write!(f, "Malformed document: {}", msg),
            AnnotError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AnnotError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl From<std::io::Error> for AnnotError {
    fn from(e: std::io::Error) -> Self {
        AnnotError::Io(e.to_string())
    }
}
