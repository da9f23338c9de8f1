//! In-memory conversion between TEX and DDS files.
//!
//! Both directions take the complete input file and return the complete
//! output file; nothing here touches the filesystem.

use texdds_dds::{DdsHeader, DdsInfo};
use texdds_tex::{deflate, TexHeader};

use crate::format::{format_for, four_cc_for};
use crate::Result;

/// Convert a TEX file to a single-level DDS file.
///
/// The DDS carries the first mipmap's dimensions and the decompressed payload
/// unchanged.
pub fn tex_to_dds(tex: &[u8]) -> Result<Vec<u8>> {
    let header = TexHeader::parse(tex)?;
    let (width, height) = header.first_mip_dimensions();
    let texels = header.read_payload(tex)?;

    let four_cc = four_cc_for(header.format());
    let mut dds = DdsHeader::for_texture(width.into(), height.into(), four_cc).to_file_bytes();
    dds.extend_from_slice(&texels);

    tracing::debug!(width, height, %four_cc, payload = texels.len(), "converted TEX to DDS");

    Ok(dds)
}

/// Convert a DDS file to a TEX file with one mipmap and a DEFLATE payload.
///
/// Everything after the 128-byte header is treated as texel data.
pub fn dds_to_tex(dds: &[u8]) -> Result<Vec<u8>> {
    let info = DdsInfo::parse(dds)?;
    let texels = info.payload(dds);
    let format = format_for(info.four_cc);

    let compressed = deflate(texels)?;
    let stored = stored_payload(texels, &compressed);

    // Dimensions wider than 16 bits are truncated.
    let header = TexHeader::for_payload(
        info.width as i16,
        info.height as i16,
        format,
        stored.len(),
        texels.len(),
    )?;

    let mut tex = header.to_bytes()?;
    tex.extend_from_slice(stored);

    tracing::debug!(
        width = info.width,
        height = info.height,
        format = format.code(),
        payload = texels.len(),
        stored = stored.len(),
        "converted DDS to TEX"
    );

    Ok(tex)
}

/// Pick the bytes written after the TEX header.
///
/// Equal lengths mark a raw payload, so a stream that did not shrink or grow
/// is stored raw to keep the file readable.
fn stored_payload<'a>(texels: &'a [u8], compressed: &'a [u8]) -> &'a [u8] {
    if compressed.len() == texels.len() {
        texels
    } else {
        compressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use texdds_dds::{layout as dds_layout, FourCC};
    use texdds_tex::{layout as tex_layout, TexFormat, TexHeaderShape};

    fn texels(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 31 % 251) as u8).collect()
    }

    fn tex_file(width: i16, height: i16, mipmaps: u8, code: u8, payload: &[u8]) -> Vec<u8> {
        let compressed = deflate(payload).unwrap();
        let mut header =
            TexHeader::for_payload(width, height, TexFormat::Dxt1, compressed.len(), payload.len())
                .unwrap();
        header.mipmap_count = mipmaps;
        header.format_code = code;

        let mut file = header.to_bytes().unwrap();
        file.extend_from_slice(&compressed);
        file
    }

    fn dds_dimensions(dds: &[u8]) -> (i32, i32) {
        let info = DdsInfo::parse(dds).unwrap();
        (info.width, info.height)
    }

    #[test]
    fn test_tex_to_dds_single_mip() {
        let payload = texels(64 * 32 / 2);
        let dds = tex_to_dds(&tex_file(64, 32, 1, 3, &payload)).unwrap();

        let header = DdsHeader::read(&dds).unwrap();
        assert_eq!(header.width.get(), 64);
        assert_eq!(header.height.get(), 32);
        assert_eq!(header.pitch_or_linear_size.get(), 64 * 32 / 2);
        assert_eq!(header.pixel_format.four_cc, FourCC::DXT1);
        assert_eq!(&dds[dds_layout::HEADER_SIZE..], payload.as_slice());
    }

    #[test]
    fn test_tex_to_dds_halves_mipmapped_dimensions() {
        let payload = texels(128 * 128);
        let dds = tex_to_dds(&tex_file(256, 256, 2, 5, &payload)).unwrap();

        assert_eq!(dds_dimensions(&dds), (128, 128));
        let header = DdsHeader::read(&dds).unwrap();
        assert_eq!(header.pitch_or_linear_size.get(), 128 * 128);
        assert_eq!(header.pixel_format.four_cc, FourCC::DXT5);
    }

    #[test]
    fn test_tex_to_dds_raw_payload() {
        let payload = texels(48);
        let header = TexHeader {
            width: 8,
            height: 4,
            mipmap_count: 1,
            format_code: 5,
            shape: TexHeaderShape::Compact { padding_flag: 1 },
            compressed_length: 48,
            decompressed_length: 48,
        };
        let mut tex = header.to_bytes().unwrap();
        tex.extend_from_slice(&payload);

        let dds = tex_to_dds(&tex).unwrap();
        assert_eq!(&dds[dds_layout::HEADER_SIZE..], payload.as_slice());
    }

    #[test]
    fn test_same_size_deflate_is_stored_raw() {
        let payload = texels(64);
        let same_size = vec![0xEEu8; 64];
        let smaller = vec![0xEEu8; 20];

        assert_eq!(stored_payload(&payload, &same_size), payload.as_slice());
        assert_eq!(stored_payload(&payload, &smaller), smaller.as_slice());

        // A header written for the raw choice reads back as the original texels.
        let stored = stored_payload(&payload, &same_size);
        let header =
            TexHeader::for_payload(8, 8, TexFormat::Dxt5, stored.len(), payload.len()).unwrap();
        let mut tex = header.to_bytes().unwrap();
        tex.extend_from_slice(stored);

        assert!(!TexHeader::parse(&tex).unwrap().is_compressed());
        let dds = tex_to_dds(&tex).unwrap();
        assert_eq!(&dds[dds_layout::HEADER_SIZE..], payload.as_slice());
    }

    #[test]
    fn test_round_trip_keeps_dimensions_and_format() {
        for code in [3u8, 5] {
            let payload = texels(2048);
            let tex = tex_file(64, 64, 1, code, &payload);

            let back = dds_to_tex(&tex_to_dds(&tex).unwrap()).unwrap();
            let header = TexHeader::parse(&back).unwrap();

            assert_eq!((header.width, header.height), (64, 64));
            assert_eq!(header.format_code, code);
            assert_eq!(header.mipmap_count, 1);
            assert_eq!(header.read_payload(&back).unwrap(), payload);
        }
    }

    #[test]
    fn test_round_trip_normalizes_other_codes_to_dxt5() {
        let tex = tex_file(16, 16, 1, 1, &texels(2048));

        let back = dds_to_tex(&tex_to_dds(&tex).unwrap()).unwrap();
        assert_eq!(TexHeader::parse(&back).unwrap().format_code, 5);
    }

    #[test]
    fn test_dds_to_tex_header() {
        let payload = texels(4096);
        let mut dds = DdsHeader::for_texture(64, 128, FourCC::DXT5).to_file_bytes();
        dds.extend_from_slice(&payload);

        let tex = dds_to_tex(&dds).unwrap();
        let header = TexHeader::parse(&tex).unwrap();

        assert_eq!(header.width, 64);
        assert_eq!(header.height, 128);
        assert_eq!(header.mipmap_count, 1);
        assert_eq!(header.format_code, 5);
        assert_eq!(header.shape, TexHeaderShape::Extended { reserved: [0, 0] });
        assert_eq!(header.decompressed_length, 4096);
        assert_eq!(
            tex.len(),
            tex_layout::PAYLOAD_OFFSET + header.compressed_length as usize
        );
        assert_eq!(header.read_payload(&tex).unwrap(), payload);
    }

    #[test]
    fn test_payload_survives_two_round_trips() {
        let payload = texels(8192);
        let mut dds = DdsHeader::for_texture(128, 128, FourCC::DXT1).to_file_bytes();
        dds.extend_from_slice(&payload);

        let once = tex_to_dds(&dds_to_tex(&dds).unwrap()).unwrap();
        let twice = tex_to_dds(&dds_to_tex(&once).unwrap()).unwrap();

        assert_eq!(once, dds);
        assert_eq!(twice, dds);
    }

    #[test]
    fn test_dds_with_empty_payload() {
        let dds = DdsHeader::for_texture(4, 4, FourCC::DXT1).to_file_bytes();

        let tex = dds_to_tex(&dds).unwrap();
        assert_eq!(TexHeader::parse(&tex).unwrap().decompressed_length, 0);
        assert_eq!(tex_to_dds(&tex).unwrap(), dds);
    }

    #[test]
    fn test_bad_magic_is_format_error() {
        let mut tex = tex_file(4, 4, 1, 3, &texels(8));
        tex[0] = b'X';
        assert_eq!(tex_to_dds(&tex).unwrap_err().kind(), ErrorKind::Format);

        let mut dds = DdsHeader::for_texture(4, 4, FourCC::DXT1).to_file_bytes();
        dds[..4].copy_from_slice(b"TEX ");
        assert_eq!(dds_to_tex(&dds).unwrap_err().kind(), ErrorKind::Format);
    }

    #[test]
    fn test_corrupt_payload_is_decompression_error() {
        let mut tex = tex_file(16, 16, 1, 5, &texels(2048));
        tex.truncate(tex.len() - 1);

        assert_eq!(tex_to_dds(&tex).unwrap_err().kind(), ErrorKind::Decompression);
    }
}
