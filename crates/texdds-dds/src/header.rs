//! DDS header structures.

use zerocopy::byteorder::little_endian::{I32, U32};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use texdds_common::BinaryReader;

use crate::layout::{DDS_LAYOUT, HEADER_SIZE};
use crate::{Error, Result, DDS_MAGIC};

/// DDS file header (the 124 bytes following the magic).
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsHeader {
    /// Header size (should be 124).
    pub size: U32,
    /// Header flags.
    pub flags: U32,
    /// Image height.
    pub height: I32,
    /// Image width.
    pub width: I32,
    /// Pitch or linear size.
    pub pitch_or_linear_size: I32,
    /// Depth (for volume textures).
    pub depth: U32,
    /// Number of mipmap levels.
    pub mipmap_count: U32,
    /// Reserved.
    pub reserved1: [U32; 11],
    /// Pixel format.
    pub pixel_format: DdsPixelFormat,
    /// Surface capabilities.
    pub caps: U32,
    /// Surface capabilities 2.
    pub caps2: U32,
    /// Surface capabilities 3.
    pub caps3: U32,
    /// Surface capabilities 4.
    pub caps4: U32,
    /// Reserved.
    pub reserved2: U32,
}

impl DdsHeader {
    /// Expected header size.
    pub const SIZE: u32 = 124;

    /// Header flags written for every texture.
    pub const FLAGS: u32 = 0x1003;

    /// `DDSCAPS_TEXTURE`.
    pub const CAPS_TEXTURE: u32 = 0x1000;

    /// Build the header for a single-level texture.
    ///
    /// The linear size is derived from the FOURCC, see [`FourCC::linear_size`].
    pub fn for_texture(width: i32, height: i32, four_cc: FourCC) -> Self {
        Self {
            size: U32::new(Self::SIZE),
            flags: U32::new(Self::FLAGS),
            height: I32::new(height),
            width: I32::new(width),
            pitch_or_linear_size: I32::new(four_cc.linear_size(width, height)),
            depth: U32::new(0),
            mipmap_count: U32::new(1),
            reserved1: [U32::new(0); 11],
            pixel_format: DdsPixelFormat::four_cc(four_cc),
            caps: U32::new(Self::CAPS_TEXTURE),
            caps2: U32::new(0),
            caps3: U32::new(0),
            caps4: U32::new(0),
            reserved2: U32::new(0),
        }
    }

    /// Parse the magic and header from the start of a DDS file.
    pub fn read(data: &[u8]) -> Result<Self> {
        check_magic(data)?;
        let (header, _) = Self::read_from_prefix(&data[DDS_MAGIC.len()..])
            .map_err(|_| Error::InvalidHeader(format!("file too small: {} bytes", data.len())))?;
        Ok(header)
    }

    /// Magic followed by the header, ready to be followed by the payload.
    pub fn to_file_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_SIZE);
        out.extend_from_slice(DDS_MAGIC);
        out.extend_from_slice(self.as_bytes());
        out
    }
}

/// DDS pixel format.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct DdsPixelFormat {
    /// Structure size (should be 32).
    pub size: U32,
    /// Pixel format flags.
    pub flags: U32,
    /// Four-character code for compression.
    pub four_cc: FourCC,
    /// Number of bits per pixel (for uncompressed).
    pub rgb_bit_count: U32,
    /// Red bit mask.
    pub r_bit_mask: U32,
    /// Green bit mask.
    pub g_bit_mask: U32,
    /// Blue bit mask.
    pub b_bit_mask: U32,
    /// Alpha bit mask.
    pub a_bit_mask: U32,
}

impl DdsPixelFormat {
    /// Expected structure size.
    pub const SIZE: u32 = 32;

    /// `DDPF_FOURCC`.
    pub const FLAG_FOURCC: u32 = 0x4;

    /// A compressed pixel format tagged with `four_cc`, masks zeroed.
    pub fn four_cc(four_cc: FourCC) -> Self {
        Self {
            size: U32::new(Self::SIZE),
            flags: U32::new(Self::FLAG_FOURCC),
            four_cc,
            rgb_bit_count: U32::new(0),
            r_bit_mask: U32::new(0),
            g_bit_mask: U32::new(0),
            b_bit_mask: U32::new(0),
            a_bit_mask: U32::new(0),
        }
    }
}

/// Four-character code for compression type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned,
)]
#[repr(transparent)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// DXT1 compression.
    pub const DXT1: Self = Self(*b"DXT1");
    /// DXT5 compression.
    pub const DXT5: Self = Self(*b"DXT5");

    /// Linear size of the top level: half a byte per texel for DXT1, one byte otherwise.
    pub fn linear_size(self, width: i32, height: i32) -> i32 {
        let texels = width.wrapping_mul(height);
        if self == Self::DXT1 {
            texels / 2
        } else {
            texels
        }
    }
}

impl std::fmt::Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// The fields a TEX conversion needs from a DDS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdsInfo {
    pub height: i32,
    pub width: i32,
    pub four_cc: FourCC,
}

impl DdsInfo {
    /// Read height, width and FOURCC from their fixed offsets.
    ///
    /// The header is assumed to be exactly 128 bytes; an extended DX10
    /// header is not recognised.
    pub fn parse(data: &[u8]) -> Result<Self> {
        check_magic(data)?;
        if data.len() < HEADER_SIZE {
            return Err(Error::InvalidHeader(format!(
                "file too small: {} bytes, header needs {}",
                data.len(),
                HEADER_SIZE
            )));
        }

        let mut reader = BinaryReader::new(data);

        // Height precedes width.
        reader.seek_field(DDS_LAYOUT.require("height")?);
        let height = reader.read_i32()?;
        reader.seek_field(DDS_LAYOUT.require("width")?);
        let width = reader.read_i32()?;

        reader.seek_field(DDS_LAYOUT.require("four_cc")?);
        let four_cc = FourCC(reader.read_array::<4>()?);

        tracing::debug!(width, height, %four_cc, "parsed DDS header");

        Ok(Self {
            height,
            width,
            four_cc,
        })
    }

    /// Everything after the fixed header.
    pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
        &data[HEADER_SIZE.min(data.len())..]
    }
}

fn check_magic(data: &[u8]) -> Result<()> {
    let mut reader = BinaryReader::new(data);
    let magic = reader
        .read_array::<4>()
        .map_err(|_| Error::InvalidHeader("file too small".into()))?;
    if &magic != DDS_MAGIC {
        return Err(Error::InvalidMagic(magic));
    }
    Ok(())
}
