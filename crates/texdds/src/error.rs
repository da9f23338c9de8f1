//! Error types for conversions.

use thiserror::Error;

/// Errors that can occur while converting a file.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error reading or writing a TEX container.
    #[error(transparent)]
    Tex(#[from] texdds_tex::Error),

    /// Error reading or writing a DDS container.
    #[error(transparent)]
    Dds(#[from] texdds_dds::Error),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad magic, truncated header or otherwise unrecognized container.
    Format,
    /// Filesystem or stream failure.
    Io,
    /// Payload could not be inflated or is shorter than declared.
    Decompression,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(_) => ErrorKind::Io,
            Self::Tex(e) => match e {
                texdds_tex::Error::Io(_) => ErrorKind::Io,
                texdds_tex::Error::Common(e) => common_kind(e),
                texdds_tex::Error::InvalidMagic(_)
                | texdds_tex::Error::InvalidLength { .. }
                | texdds_tex::Error::PayloadTooLarge(_) => ErrorKind::Format,
                texdds_tex::Error::TruncatedPayload { .. }
                | texdds_tex::Error::Decompression(_)
                | texdds_tex::Error::ShortInflate { .. } => ErrorKind::Decompression,
            },
            Self::Dds(e) => match e {
                texdds_dds::Error::Common(e) => common_kind(e),
                texdds_dds::Error::InvalidMagic(_) | texdds_dds::Error::InvalidHeader(_) => {
                    ErrorKind::Format
                }
            },
        }
    }
}

fn common_kind(error: &texdds_common::Error) -> ErrorKind {
    match error {
        texdds_common::Error::Io(_) => ErrorKind::Io,
        texdds_common::Error::UnexpectedEof { .. } | texdds_common::Error::UnknownField { .. } => {
            ErrorKind::Format
        }
    }
}

/// Result type for conversions.
pub type Result<T> = std::result::Result<T, Error>;
