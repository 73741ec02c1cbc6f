//! JPEG encoding for export and lossy round-trips.
//!
//! Uses the `image` crate's JPEG encoder. JPEG has no alpha channel, so the
//! buffer's alpha bytes are dropped and the pixels are written as RGB.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::{validate, EncodeError};
use crate::buffer::PixelBuffer;

/// Encode a buffer to JPEG bytes.
///
/// # Arguments
///
/// * `buffer` - Source pixels; alpha is ignored
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate(buffer)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut out = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(
            &buffer.to_rgb_bytes(),
            buffer.width,
            buffer.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    proptest! {
        /// Property: Encoding always produces a framed JPEG for any valid buffer.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in 0u8..=255,
            argb in any::<u32>(),
        ) {
            let buf = PixelBuffer::filled(width, height, argb);
            let jpeg_bytes = encode_jpeg(&buf, quality);
            prop_assert!(jpeg_bytes.is_ok(), "Valid input should produce valid output");

            let jpeg_bytes = jpeg_bytes.unwrap();
            let len = jpeg_bytes.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            prop_assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let buf = PixelBuffer::filled(width, height, 0xFF64_6464);
            let first = encode_jpeg(&buf, quality).unwrap();
            let second = encode_jpeg(&buf, quality).unwrap();
            prop_assert_eq!(first, second, "Same input should produce same output");
        }
    }
}
