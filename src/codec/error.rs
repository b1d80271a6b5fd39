//! Error types for NetPBM decoding and encoding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, allocating or writing image data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The input file could not be opened
    #[error("Unable to open input file '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Magic number is not one of the accepted input variants (P3, P6)
    #[error("Invalid magic number '{0}' (expected P3 or P6)")]
    InvalidMagic(String),

    /// A header field (width, height, maxval) is not an unsigned integer
    #[error("Invalid {field} in header: '{token}'")]
    InvalidHeader { field: &'static str, token: String },

    /// An ASCII sample is not an integer
    #[error("Invalid sample '{token}' at row {row}, column {col}")]
    InvalidSample { row: usize, col: usize, token: String },

    /// The stream ended before the named item was complete
    #[error("Unexpected end of file while reading {0}")]
    UnexpectedEof(&'static str),

    /// A plane of the requested size could not be allocated
    #[error("Unable to allocate memory for a {rows}x{cols} plane")]
    Allocation { rows: usize, cols: usize },

    /// Any other I/O failure on the underlying stream
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CodecError {
    /// Short machine-readable category, used by the error log.
    pub fn kind(&self) -> &'static str {
        match self {
            CodecError::Open { .. } | CodecError::Io(_) => "io_error",
            CodecError::InvalidMagic(_)
            | CodecError::InvalidHeader { .. }
            | CodecError::InvalidSample { .. }
            | CodecError::UnexpectedEof(_) => "format_error",
            CodecError::Allocation { .. } => "allocation_error",
        }
    }
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
