//! texdds - conversion between TEX and DDS texture containers.
//!
//! The converters in [`convert`] are pure functions over byte slices. The
//! [`file`] and [`batch`] modules add the filesystem layer: extension-based
//! dispatch, sibling output paths, and a batch loop that never stops on a
//! single bad file.
//!
//! # Crates
//!
//! - [`texdds_common`] - Binary reading/writing and byte layout tables
//! - [`texdds_dds`] - DDS header handling
//! - [`texdds_tex`] - TEX header and payload handling
//!
//! # Example
//!
//! ```no_run
//! use texdds::prelude::*;
//!
//! let summary = convert_batch(["a.tex", "b.dds"], |path, result| match result {
//!     Ok(outcome) => println!("{}: {:?}", path.display(), outcome),
//!     Err(e) => eprintln!("{}: {}", path.display(), e),
//! });
//! println!("{} converted, {} failed", summary.succeeded, summary.failed);
//! ```

mod error;

pub mod batch;
pub mod convert;
pub mod file;
pub mod format;

// Re-export all sub-crates
pub use texdds_common as common;
pub use texdds_dds as dds;
pub use texdds_tex as tex;

pub use error::{Error, ErrorKind, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::batch::{convert_batch, BatchSummary};
    pub use crate::convert::{dds_to_tex, tex_to_dds};
    pub use crate::file::{convert_file, Direction, Outcome};
    pub use crate::{Error, ErrorKind};
    pub use texdds_dds::{DdsHeader, DdsInfo, FourCC};
    pub use texdds_tex::{TexFormat, TexHeader, TexHeaderShape};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
