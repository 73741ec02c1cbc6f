//! Image encoding for Retouch.
//!
//! This module provides functionality for:
//! - Encoding buffers to PNG (lossless, keeps alpha)
//! - Encoding buffers to JPEG with configurable quality
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::encode::{encode, OutputFormat};
//!
//! let bytes = encode(&buffer, OutputFormat::Png).unwrap();
//! std::fs::write("edited.png", bytes).unwrap();
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, OutputFormat, DEFAULT_JPEG_QUALITY};

use crate::buffer::PixelBuffer;

/// Encode `buffer` in the requested format.
pub fn encode(buffer: &PixelBuffer, format: OutputFormat) -> Result<Vec<u8>, EncodeError> {
    match format {
        OutputFormat::Png => encode_png(buffer),
        OutputFormat::Jpeg { quality } => encode_jpeg(buffer, quality),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_dispatch() {
        let buf = PixelBuffer::filled(4, 4, 0xFF80_8080);
        let png = encode(&buf, OutputFormat::Png).unwrap();
        let jpeg = encode(&buf, OutputFormat::jpeg()).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
