//! TEX texture container handling.
//!
//! A TEX file is a 32-byte little-endian header followed by a payload that is
//! either stored as-is or compressed with raw DEFLATE:
//!
//! ```text
//! "TEX " | i16 width | i16 height | u8 mipmaps | u8 format | i16 padding flag
//!        | [i32 reserved x2, only when the flag is 0]
//!        | i32 compressed length | i32 decompressed length
//!        | zero padding up to offset 32 | payload
//! ```
//!
//! Equal length fields mean the payload is stored uncompressed.
//!
//! # Example
//!
//! ```
//! use texdds_tex::{deflate, TexFormat, TexHeader};
//!
//! let texels = vec![7u8; 512];
//! let compressed = deflate(&texels)?;
//!
//! let header = TexHeader::for_payload(32, 32, TexFormat::Dxt5, compressed.len(), texels.len())?;
//! let mut file = header.to_bytes()?;
//! file.extend_from_slice(&compressed);
//!
//! let parsed = TexHeader::parse(&file)?;
//! assert_eq!(parsed.read_payload(&file)?, texels);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod payload;

pub mod layout;

pub use error::{Error, Result};
pub use header::{TexFormat, TexHeader, TexHeaderShape};
pub use payload::{deflate, inflate};

/// TEX file magic bytes ("TEX ").
pub const TEX_MAGIC: &[u8; 4] = b"TEX ";
