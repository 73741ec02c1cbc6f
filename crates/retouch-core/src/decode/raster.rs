//! Decoding of PNG and JPEG bytes into packed ARGB buffers.

use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use super::DecodeError;
use crate::buffer::PixelBuffer;

/// Decode an encoded image (PNG or JPEG) into a [`PixelBuffer`].
///
/// The format is detected from the leading bytes. The image is converted to
/// 8-bit RGBA before packing, so images without alpha come back opaque.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized,
/// `DecodeError::CorruptedFile` if decoding fails, and
/// `DecodeError::EmptyImage` if the image has a zero dimension.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    debug!(
        width = img.width(),
        height = img.height(),
        bytes = bytes.len(),
        "decoded image"
    );
    Ok(PixelBuffer::from_rgba_image(img.into_rgba8()))
}
