//! Little-endian binary writer.

use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

use crate::Result;

/// A binary writer that appends little-endian values to a byte buffer.
///
/// # Example
///
/// ```
/// use texdds_common::BinaryWriter;
///
/// let mut writer = BinaryWriter::new();
/// writer.write_bytes(b"TEX ").unwrap();
/// writer.write_i16(-2).unwrap();
/// writer.pad_to(8).unwrap();
///
/// assert_eq!(writer.into_inner(), b"TEX \xFE\xFF\0\0");
/// ```
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Current write position (number of bytes written so far).
    #[inline]
    pub fn position(&self) -> usize {
        self.buffer.len()
    }

    /// Write raw bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.buffer.write_all(bytes)?;
        Ok(())
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.buffer.write_u8(value)?;
        Ok(())
    }

    /// Write a little-endian i16.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.buffer.write_i16::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write a little-endian i32.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.buffer.write_i32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Write zero bytes until the position reaches `offset`.
    ///
    /// Does nothing if the position is already at or past `offset`.
    pub fn pad_to(&mut self, offset: usize) -> Result<()> {
        while self.position() < offset {
            self.write_u8(0)?;
        }
        Ok(())
    }

    /// Consume the writer and return the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
