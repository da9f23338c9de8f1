//! Raw DEFLATE payload codec.

use std::io::{Read, Write};

use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use flate2::Compression;

use crate::{Error, Result};

/// Inflate a raw DEFLATE stream, keeping the first `decompressed_length` bytes.
///
/// A stream that ends early is rejected with [`Error::ShortInflate`].
pub fn inflate(data: &[u8], decompressed_length: usize) -> Result<Vec<u8>> {
    // The declared length comes from the file; grow past this hint only as data arrives.
    let mut output = Vec::with_capacity(initial_capacity(data.len(), decompressed_length));

    DeflateDecoder::new(data)
        .take(decompressed_length as u64)
        .read_to_end(&mut output)
        .map_err(|e| Error::Decompression(e.to_string()))?;

    if output.len() < decompressed_length {
        return Err(Error::ShortInflate {
            expected: decompressed_length,
            actual: output.len(),
        });
    }

    tracing::trace!(
        compressed = data.len(),
        decompressed = output.len(),
        "inflated payload"
    );

    Ok(output)
}

/// Pre-allocation for an inflate, bounded by a generous multiple of the input size.
fn initial_capacity(compressed_length: usize, decompressed_length: usize) -> usize {
    decompressed_length.min(compressed_length.saturating_mul(4))
}

/// Compress with raw DEFLATE at the default level.
pub fn deflate(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    let compressed = encoder.finish()?;

    tracing::trace!(
        decompressed = data.len(),
        compressed = compressed.len(),
        "deflated payload"
    );

    Ok(compressed)
}
