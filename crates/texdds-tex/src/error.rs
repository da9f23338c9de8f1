//! Error types for TEX handling.

use thiserror::Error;

/// Errors that can occur when working with TEX files.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Common library error.
    #[error("{0}")]
    Common(#[from] texdds_common::Error),

    /// Invalid TEX magic.
    #[error("invalid TEX magic: expected 'TEX ', got {0:?}")]
    InvalidMagic([u8; 4]),

    /// A length field holds a negative value.
    #[error("invalid {field}: {value}")]
    InvalidLength { field: &'static str, value: i32 },

    /// The payload does not fit in a 32-bit length field.
    #[error("payload too large for TEX length field: {0} bytes")]
    PayloadTooLarge(usize),

    /// The file ends before the declared payload does.
    #[error("truncated payload: expected {expected} bytes, only {available} available")]
    TruncatedPayload { expected: usize, available: usize },

    /// DEFLATE stream could not be decoded.
    #[error("decompression failed: {0}")]
    Decompression(String),

    /// DEFLATE stream ended before producing the declared size.
    #[error("decompressed size mismatch: expected {expected}, got {actual}")]
    ShortInflate { expected: usize, actual: usize },
}

/// Result type for TEX operations.
pub type Result<T> = std::result::Result<T, Error>;
