//! PNG encoding.
//!
//! PNG is lossless and keeps alpha, so it is the default format for saving
//! and for the resampler's codec round-trip.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use super::types::{validate, EncodeError};
use crate::buffer::PixelBuffer;

/// Encode a buffer to PNG bytes (8-bit RGBA).
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    validate(buffer)?;

    let mut out = Cursor::new(Vec::new());
    PngEncoder::new(&mut out)
        .write_image(
            &buffer.to_rgba_bytes(),
            buffer.width,
            buffer.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}
