//! Byte layouts of the 32-byte TEX header.
//!
//! The header comes in two shapes. When the padding flag is zero, two
//! reserved 32-bit words sit between the flag and the length fields
//! ([`TEX_EXTENDED_LAYOUT`]); otherwise the lengths follow the flag directly
//! ([`TEX_COMPACT_LAYOUT`]). Both shapes put the payload at [`PAYLOAD_OFFSET`].

use texdds_common::{Field, Layout};

pub const MAGIC: Field = Field::le("magic", 0, 4);
pub const WIDTH: Field = Field::le("width", 4, 2);
pub const HEIGHT: Field = Field::le("height", 6, 2);
pub const MIPMAP_COUNT: Field = Field::le("mipmap_count", 8, 1);
pub const FORMAT_CODE: Field = Field::le("format_code", 9, 1);
pub const PADDING_FLAG: Field = Field::le("padding_flag", 10, 2);
pub const RESERVED: Field = Field::le("reserved", 12, 8);

/// Length fields when the reserved words are present.
pub const EXTENDED_COMPRESSED_LENGTH: Field = Field::le("compressed_length", 20, 4);
pub const EXTENDED_DECOMPRESSED_LENGTH: Field = Field::le("decompressed_length", 24, 4);

/// Length fields when the reserved words are absent.
pub const COMPACT_COMPRESSED_LENGTH: Field = Field::le("compressed_length", 12, 4);
pub const COMPACT_DECOMPRESSED_LENGTH: Field = Field::le("decompressed_length", 16, 4);

/// Absolute offset of the payload.
pub const PAYLOAD_OFFSET: usize = 32;

/// Header with the two reserved words (padding flag == 0).
pub const TEX_EXTENDED_LAYOUT: Layout = Layout {
    name: "TEX (extended)",
    size: PAYLOAD_OFFSET,
    fields: &[
        MAGIC,
        WIDTH,
        HEIGHT,
        MIPMAP_COUNT,
        FORMAT_CODE,
        PADDING_FLAG,
        RESERVED,
        EXTENDED_COMPRESSED_LENGTH,
        EXTENDED_DECOMPRESSED_LENGTH,
    ],
};

/// Header without the reserved words (padding flag != 0).
pub const TEX_COMPACT_LAYOUT: Layout = Layout {
    name: "TEX (compact)",
    size: PAYLOAD_OFFSET,
    fields: &[
        MAGIC,
        WIDTH,
        HEIGHT,
        MIPMAP_COUNT,
        FORMAT_CODE,
        PADDING_FLAG,
        COMPACT_COMPRESSED_LENGTH,
        COMPACT_DECOMPRESSED_LENGTH,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_are_consistent() {
        assert!(TEX_EXTENDED_LAYOUT.is_consistent());
        assert!(TEX_COMPACT_LAYOUT.is_consistent());
    }

    #[test]
    fn test_shapes_share_prefix() {
        for field in [MAGIC, WIDTH, HEIGHT, MIPMAP_COUNT, FORMAT_CODE, PADDING_FLAG] {
            assert_eq!(TEX_EXTENDED_LAYOUT.field(field.name), Some(&field));
            assert_eq!(TEX_COMPACT_LAYOUT.field(field.name), Some(&field));
        }
        assert!(TEX_COMPACT_LAYOUT.field("reserved").is_none());
    }

    #[test]
    fn test_lengths_end_before_payload() {
        assert_eq!(EXTENDED_DECOMPRESSED_LENGTH.end(), 28);
        assert_eq!(COMPACT_DECOMPRESSED_LENGTH.end(), 20);
        assert!(EXTENDED_DECOMPRESSED_LENGTH.end() <= PAYLOAD_OFFSET);
    }
}
