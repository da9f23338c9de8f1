//! DDS texture header handling.
//!
//! Only the subset needed for single-mipmap block-compressed textures is
//! covered: a fixed 128-byte header (`"DDS "` magic plus the 124-byte
//! `DDS_HEADER`), a FOURCC pixel format, and a payload starting right after.
//!
//! # Example
//!
//! ```
//! use texdds_dds::{DdsHeader, DdsInfo, FourCC};
//!
//! let mut file = DdsHeader::for_texture(64, 32, FourCC::DXT1).to_file_bytes();
//! file.extend_from_slice(&[0u8; 1024]);
//!
//! let info = DdsInfo::parse(&file)?;
//! assert_eq!((info.width, info.height), (64, 32));
//! assert_eq!(info.four_cc, FourCC::DXT1);
//! assert_eq!(info.payload(&file).len(), 1024);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;

pub mod layout;

pub use error::{Error, Result};
pub use header::{DdsHeader, DdsInfo, DdsPixelFormat, FourCC};

/// DDS file magic bytes ("DDS ").
pub const DDS_MAGIC: &[u8; 4] = b"DDS ";
