//! Shared types for image encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The underlying encoder failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Default JPEG quality when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Encoded raster format used for export and for the resampler round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum OutputFormat {
    /// Lossless PNG with alpha.
    #[default]
    Png,
    /// Lossy JPEG at the given quality (1-100). Alpha is dropped.
    Jpeg { quality: u8 },
}

impl OutputFormat {
    /// JPEG at [`DEFAULT_JPEG_QUALITY`].
    pub fn jpeg() -> Self {
        OutputFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg { .. } => "image/jpeg",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Check that a buffer can be handed to an encoder.
pub(super) fn validate(buffer: &PixelBuffer) -> Result<(), EncodeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let expected = buffer.width as usize * buffer.height as usize;
    if buffer.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: buffer.pixels.len(),
        });
    }
    Ok(())
}
