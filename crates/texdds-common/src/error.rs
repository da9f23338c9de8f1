//! Error types for texdds-common.

use thiserror::Error;

/// Common error type for texdds operations.
#[derive(Debug, Error)]
pub enum Error {
    /// End of buffer reached while reading.
    #[error("unexpected end of buffer: needed {needed} bytes but only {available} available")]
    UnexpectedEof { needed: usize, available: usize },

    /// A layout has no field with this name.
    #[error("layout {layout} has no field {field}")]
    UnknownField {
        layout: &'static str,
        field: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
