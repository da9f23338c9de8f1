//! Common utilities for texdds.
//!
//! This crate provides the foundational types shared by the container crates:
//!
//! - [`BinaryReader`] - Bounds-checked little-endian reading from byte slices
//! - [`BinaryWriter`] - Little-endian writing into a growable buffer
//! - [`layout`] - Named byte-layout tables for fixed-size headers

mod error;
mod reader;
mod writer;

pub mod layout;

pub use error::{Error, Result};
pub use layout::{Endian, Field, Layout};
pub use reader::BinaryReader;
pub use writer::BinaryWriter;
