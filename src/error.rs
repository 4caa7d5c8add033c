//! Error types shared by the tokenizing, shingling and comparison pipelines.

use thiserror::Error;

/// Errors raised at the boundary of the core (configuration and input validation).
///
/// Degenerate inputs (empty documents, empty token sets, 0/0 similarity) are
/// not errors; they resolve to empty collections or [`crate::Similarity::Undefined`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A parameter is out of range or inconsistent.
    #[error("invalid parameter: {0}")]
    InvalidParam(&'static str),
    /// An absent input was handed to an operation that needs one.
    #[error("missing input: {0}")]
    MissingInput(&'static str),
    /// The input buffer contains a NUL byte.
    #[error("input contains a NUL byte at offset {offset}")]
    NulByte {
        /// Byte offset of the first NUL.
        offset: usize,
    },
    /// The input buffer is not valid UTF-8.
    #[error("input is not valid UTF-8 (first invalid byte at offset {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Validate a raw document buffer and view it as text.
///
/// Rejects embedded NUL bytes (including trailing ones) and invalid UTF-8.
pub fn validate_text(bytes: &[u8]) -> Result<&str> {
    if let Some(offset) = bytes.iter().position(|&b| b == 0) {
        return Err(Error::NulByte { offset });
    }
    std::str::from_utf8(bytes).map_err(|e| Error::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}
