//! Byte layout of the 128-byte DDS file header.
//!
//! Offsets are absolute from the start of the file, so they include the
//! four magic bytes in front of `DDS_HEADER`.

use texdds_common::{Field, Layout};

pub const MAGIC: Field = Field::le("magic", 0, 4);
pub const SIZE: Field = Field::le("size", 4, 4);
pub const FLAGS: Field = Field::le("flags", 8, 4);
pub const HEIGHT: Field = Field::le("height", 12, 4);
pub const WIDTH: Field = Field::le("width", 16, 4);
pub const PITCH_OR_LINEAR_SIZE: Field = Field::le("pitch_or_linear_size", 20, 4);
pub const DEPTH: Field = Field::le("depth", 24, 4);
pub const MIPMAP_COUNT: Field = Field::le("mipmap_count", 28, 4);
pub const RESERVED1: Field = Field::le("reserved1", 32, 44);
pub const PF_SIZE: Field = Field::le("pf_size", 76, 4);
pub const PF_FLAGS: Field = Field::le("pf_flags", 80, 4);
pub const FOUR_CC: Field = Field::le("four_cc", 84, 4);
pub const PF_RGB_BIT_COUNT: Field = Field::le("pf_rgb_bit_count", 88, 4);
pub const PF_R_MASK: Field = Field::le("pf_r_mask", 92, 4);
pub const PF_G_MASK: Field = Field::le("pf_g_mask", 96, 4);
pub const PF_B_MASK: Field = Field::le("pf_b_mask", 100, 4);
pub const PF_A_MASK: Field = Field::le("pf_a_mask", 104, 4);
pub const CAPS: Field = Field::le("caps", 108, 4);
pub const CAPS2: Field = Field::le("caps2", 112, 4);
pub const CAPS3: Field = Field::le("caps3", 116, 4);
pub const CAPS4: Field = Field::le("caps4", 120, 4);
pub const RESERVED2: Field = Field::le("reserved2", 124, 4);

/// Size of the whole file header; the payload starts at this offset.
pub const HEADER_SIZE: usize = 128;

/// The DDS header table.
pub const DDS_LAYOUT: Layout = Layout {
    name: "DDS",
    size: HEADER_SIZE,
    fields: &[
        MAGIC,
        SIZE,
        FLAGS,
        HEIGHT,
        WIDTH,
        PITCH_OR_LINEAR_SIZE,
        DEPTH,
        MIPMAP_COUNT,
        RESERVED1,
        PF_SIZE,
        PF_FLAGS,
        FOUR_CC,
        PF_RGB_BIT_COUNT,
        PF_R_MASK,
        PF_G_MASK,
        PF_B_MASK,
        PF_A_MASK,
        CAPS,
        CAPS2,
        CAPS3,
        CAPS4,
        RESERVED2,
    ],
};
