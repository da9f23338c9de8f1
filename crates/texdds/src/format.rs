//! Mapping between TEX format codes and DDS FOURCCs.
//!
//! The mapping is lossy: every TEX code other than 3 becomes DXT5, and every
//! FOURCC other than DXT1 becomes code 5.

use texdds_dds::FourCC;
use texdds_tex::TexFormat;

/// FOURCC written to DDS for a TEX format.
pub fn four_cc_for(format: TexFormat) -> FourCC {
    match format {
        TexFormat::Dxt1 => FourCC::DXT1,
        TexFormat::Dxt5 => FourCC::DXT5,
    }
}

/// TEX format for a DDS FOURCC.
pub fn format_for(four_cc: FourCC) -> TexFormat {
    if four_cc == FourCC::DXT1 {
        TexFormat::Dxt1
    } else {
        TexFormat::Dxt5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping() {
        assert_eq!(four_cc_for(TexFormat::Dxt1), FourCC::DXT1);
        assert_eq!(four_cc_for(TexFormat::Dxt5), FourCC::DXT5);
        assert_eq!(format_for(FourCC::DXT1), TexFormat::Dxt1);
        assert_eq!(format_for(FourCC::DXT5), TexFormat::Dxt5);
    }

    #[test]
    fn test_unknown_codes_normalize_to_dxt5() {
        assert_eq!(four_cc_for(TexFormat::from_code(1)), FourCC::DXT5);
        assert_eq!(format_for(FourCC(*b"DXT3")), TexFormat::Dxt5);
        assert_eq!(format_for(FourCC(*b"dxt1")), TexFormat::Dxt5);
    }
}
