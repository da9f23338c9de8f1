//! TEX header model.

use texdds_common::{BinaryReader, BinaryWriter, Layout};

use crate::layout::{self, PAYLOAD_OFFSET, TEX_COMPACT_LAYOUT, TEX_EXTENDED_LAYOUT};
use crate::payload::inflate;
use crate::{Error, Result, TEX_MAGIC};

/// Block compression format stored in the TEX format byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TexFormat {
    /// Format code 3.
    Dxt1,
    /// Format code 5.
    Dxt5,
}

impl TexFormat {
    /// Map a format byte. Only 3 means DXT1; every other code is treated as DXT5.
    pub fn from_code(code: u8) -> Self {
        match code {
            3 => Self::Dxt1,
            _ => Self::Dxt5,
        }
    }

    /// The format byte written for this format.
    pub fn code(self) -> u8 {
        match self {
            Self::Dxt1 => 3,
            Self::Dxt5 => 5,
        }
    }
}

/// The two header shapes selected by the padding flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TexHeaderShape {
    /// Padding flag 0: two reserved words precede the length fields.
    Extended { reserved: [i32; 2] },
    /// Non-zero padding flag: the length fields follow the flag directly.
    Compact { padding_flag: i16 },
}

impl TexHeaderShape {
    /// The padding flag value that selects this shape.
    pub fn padding_flag(&self) -> i16 {
        match self {
            Self::Extended { .. } => 0,
            Self::Compact { padding_flag } => *padding_flag,
        }
    }

    /// Byte layout of this shape.
    pub fn layout(&self) -> &'static Layout {
        match self {
            Self::Extended { .. } => &TEX_EXTENDED_LAYOUT,
            Self::Compact { .. } => &TEX_COMPACT_LAYOUT,
        }
    }

}

/// A parsed TEX header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexHeader {
    /// Stored width; double the first mipmap's width when there are several mipmaps.
    pub width: i16,
    /// Stored height; double the first mipmap's height when there are several mipmaps.
    pub height: i16,
    pub mipmap_count: u8,
    pub format_code: u8,
    pub shape: TexHeaderShape,
    pub compressed_length: i32,
    pub decompressed_length: i32,
}

impl TexHeader {
    /// Header for a single-mipmap texture in the extended shape.
    pub fn for_payload(
        width: i16,
        height: i16,
        format: TexFormat,
        compressed_length: usize,
        decompressed_length: usize,
    ) -> Result<Self> {
        let to_i32 = |len: usize| i32::try_from(len).map_err(|_| Error::PayloadTooLarge(len));

        Ok(Self {
            width,
            height,
            mipmap_count: 1,
            format_code: format.code(),
            shape: TexHeaderShape::Extended { reserved: [0, 0] },
            compressed_length: to_i32(compressed_length)?,
            decompressed_length: to_i32(decompressed_length)?,
        })
    }

    /// Parse the header from the start of a TEX file.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);

        let magic = reader.read_array::<4>()?;
        if &magic != TEX_MAGIC {
            return Err(Error::InvalidMagic(magic));
        }

        let width = reader.read_i16()?;
        let height = reader.read_i16()?;
        let mipmap_count = reader.read_u8()?;
        let format_code = reader.read_u8()?;
        let padding_flag = reader.read_i16()?;

        let shape = if padding_flag == 0 {
            reader.seek_field(&layout::RESERVED);
            TexHeaderShape::Extended {
                reserved: [reader.read_i32()?, reader.read_i32()?],
            }
        } else {
            TexHeaderShape::Compact { padding_flag }
        };

        let fields = shape.layout();
        reader.seek_field(fields.require("compressed_length")?);
        let compressed_length = reader.read_i32()?;
        reader.seek_field(fields.require("decompressed_length")?);
        let decompressed_length = reader.read_i32()?;

        let header = Self {
            width,
            height,
            mipmap_count,
            format_code,
            shape,
            compressed_length,
            decompressed_length,
        };

        tracing::debug!(
            width,
            height,
            mipmap_count,
            format_code,
            padding_flag,
            compressed_length,
            decompressed_length,
            "parsed TEX header"
        );

        Ok(header)
    }

    /// Serialize the header, zero-padded to [`PAYLOAD_OFFSET`].
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(PAYLOAD_OFFSET);

        writer.write_bytes(TEX_MAGIC)?;
        writer.write_i16(self.width)?;
        writer.write_i16(self.height)?;
        writer.write_u8(self.mipmap_count)?;
        writer.write_u8(self.format_code)?;
        writer.write_i16(self.shape.padding_flag())?;

        if let TexHeaderShape::Extended { reserved } = self.shape {
            writer.write_i32(reserved[0])?;
            writer.write_i32(reserved[1])?;
        }

        writer.write_i32(self.compressed_length)?;
        writer.write_i32(self.decompressed_length)?;
        writer.pad_to(PAYLOAD_OFFSET)?;

        Ok(writer.into_inner())
    }

    /// Format named by the format byte.
    pub fn format(&self) -> TexFormat {
        TexFormat::from_code(self.format_code)
    }

    /// Equal length fields mean the payload is stored raw.
    pub fn is_compressed(&self) -> bool {
        self.compressed_length != self.decompressed_length
    }

    /// Width and height of the first mipmap.
    ///
    /// With more than one mipmap the stored dimensions are twice the first
    /// level's, so they are halved.
    pub fn first_mip_dimensions(&self) -> (i16, i16) {
        if self.mipmap_count > 1 {
            (self.width / 2, self.height / 2)
        } else {
            (self.width, self.height)
        }
    }

    /// Read the payload that follows the header and return the texel data.
    ///
    /// Compressed payloads are inflated and truncated to the declared
    /// decompressed length. Trailing bytes past the declared payload are ignored.
    pub fn read_payload(&self, data: &[u8]) -> Result<Vec<u8>> {
        let compressed_length = checked_length("compressed length", self.compressed_length)?;
        let decompressed_length =
            checked_length("decompressed length", self.decompressed_length)?;

        let mut reader = BinaryReader::new(data);
        reader.pad_to(PAYLOAD_OFFSET);

        let stored_length = if self.is_compressed() {
            compressed_length
        } else {
            decompressed_length
        };

        let stored = reader
            .read_bytes(stored_length)
            .map_err(|_| Error::TruncatedPayload {
                expected: stored_length,
                available: reader.remaining(),
            })?;

        if self.is_compressed() {
            inflate(stored, decompressed_length)
        } else {
            Ok(stored.to_vec())
        }
    }
}

fn checked_length(field: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidLength { field, value })
}
