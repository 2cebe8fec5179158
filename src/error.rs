//! Error types for the flow-diagram pipeline.
//!
//! The layout engine itself never fails; these cover the surfaces around it
//! (reading postings, persistence, editor commands).

use thiserror::Error;

/// Result type alias for fallible operations outside the layout engine.
pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum FlowError {
    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding or encoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A line of the text posting format could not be parsed
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// An input or output format name that is not recognised
    #[error("unknown format '{0}'; use json or text for input, json or svg for output")]
    UnknownFormat(String),

    /// An editor command referenced a node or arrow that does not exist
    #[error("no {kind} with id '{id}'")]
    UnknownElement { kind: &'static str, id: String },
}
