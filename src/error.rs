//! Error types for wikichapter.
//!
//! Parsing itself never fails: missing templates, headings or containers
//! degrade to empty structures. Errors are reserved for input that cannot be
//! treated as text at all, and for serialisation of the results.

/// Error type for chapter extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
    },

    /// Serialising extraction output to JSON failed.
    #[error("JSON serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
