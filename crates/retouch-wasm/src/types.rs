//! WASM-compatible wrapper types for pixel buffers.
//!
//! This module provides JavaScript-friendly types that wrap the core Retouch
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use retouch_core::decode::FilterType;
use retouch_core::{PixelBuffer, ReferenceCoordinate};
use wasm_bindgen::prelude::*;

/// A packed ARGB image wrapper for JavaScript.
///
/// Pixels are exposed as a `Uint32Array` with alpha in the most significant
/// byte. Use [`JsPixelBuffer::from_rgba`] and [`JsPixelBuffer::to_rgba`] to
/// move data to and from a canvas `ImageData`.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. Calling `pixels()` or `to_rgba()`
/// copies it into JavaScript memory. Call `free()` to release a large image
/// early; otherwise wasm-bindgen's finalizer handles it.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a buffer from dimensions and packed ARGB pixels.
    ///
    /// Fails if either dimension is zero or `pixels.length != width * height`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<JsPixelBuffer, JsValue> {
        Self::try_new(width, height, pixels).map_err(|e| JsValue::from_str(&e))
    }

    /// Create a buffer from interleaved RGBA bytes, as found in `ImageData.data`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<JsPixelBuffer, JsValue> {
        Self::try_from_rgba(width, height, rgba).map_err(|e| JsValue::from_str(&e))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of pixels (width * height)
    #[wasm_bindgen(getter)]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Returns packed ARGB pixels as a Uint32Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u32> {
        self.pixels.clone()
    }

    /// Returns interleaved RGBA bytes, ready for `new ImageData(...)`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.to_buffer().to_rgba_bytes()
    }
}

impl JsPixelBuffer {
    pub(crate) fn try_new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, String> {
        if width == 0 || height == 0 {
            return Err(format!(
                "Invalid dimensions: width ({width}) and height ({height}) must be non-zero"
            ));
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(format!(
                "Invalid pixel data: expected {expected} pixels (width * height), got {}",
                pixels.len()
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn try_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, String> {
        if rgba.len() % 4 != 0 {
            return Err(format!(
                "RGBA data length {} is not a multiple of 4",
                rgba.len()
            ));
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|c| retouch_core::buffer::pack_argb(c[3], c[0], c[1], c[2]))
            .collect();
        Self::try_new(width, height, pixels)
    }

    pub(crate) fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Wrap a core buffer. Core buffers always satisfy the length invariant.
    pub(crate) fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            width: buffer.width,
            height: buffer.height,
            pixels: buffer.pixels,
        }
    }

    /// Convert back to a core buffer.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer::new(self.width, self.height, self.pixels.clone())
    }
}

/// A pixel position returned to JavaScript.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsReferenceCoordinate {
    pub x: u32,
    pub y: u32,
}

impl From<ReferenceCoordinate> for JsReferenceCoordinate {
    fn from(coord: ReferenceCoordinate) -> Self {
        Self {
            x: coord.x,
            y: coord.y,
        }
    }
}

/// Turn optional `x`/`y` arguments into a checked reference coordinate.
///
/// Both omitted means "locate automatically". Supplying only one of them, or
/// a coordinate outside the image, is an error.
pub(crate) fn reference_from_parts(
    (width, height): (u32, u32),
    x: Option<u32>,
    y: Option<u32>,
) -> Result<Option<ReferenceCoordinate>, String> {
    match (x, y) {
        (None, None) => Ok(None),
        (Some(x), Some(y)) => {
            check_reference((width, height), ReferenceCoordinate::new(x, y))?;
            Ok(Some(ReferenceCoordinate::new(x, y)))
        }
        _ => Err("Reference coordinate needs both x and y".to_string()),
    }
}

/// Reject a reference coordinate outside a `width x height` image.
pub(crate) fn check_reference(
    (width, height): (u32, u32),
    coord: ReferenceCoordinate,
) -> Result<(), String> {
    if coord.x >= width || coord.y >= height {
        return Err(format!(
            "Reference coordinate ({}, {}) is outside the {}x{} image",
            coord.x, coord.y, width, height
        ));
    }
    Ok(())
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_pixel_buffer_creation() {
        let img = JsPixelBuffer::try_new(100, 50, vec![0u32; 100 * 50]).unwrap();
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
    }

    #[test]
    fn test_js_pixel_buffer_rejects_bad_length() {
        let err = JsPixelBuffer::try_new(10, 10, vec![0u32; 99]).err().unwrap();
        assert!(err.contains("expected 100"));
    }

    #[test]
    fn test_js_pixel_buffer_rejects_zero_dimension() {
        assert!(JsPixelBuffer::try_new(0, 10, vec![]).is_err());
    }

    #[test]
    fn test_rgba_round_trip() {
        let rgba = vec![255u8, 128, 64, 32, 1, 2, 3, 4];
        let img = JsPixelBuffer::try_from_rgba(2, 1, &rgba).unwrap();
        assert_eq!(img.pixels(), vec![0x20FF_8040, 0x0401_0203]);
        assert_eq!(img.to_rgba(), rgba);
    }

    #[test]
    fn test_rgba_rejects_partial_pixel() {
        assert!(JsPixelBuffer::try_from_rgba(1, 1, &[1, 2, 3]).is_err());
    }

    #[test]
    fn test_buffer_conversion() {
        let core = PixelBuffer::filled(20, 10, 0xFF00_00FF);
        let js = JsPixelBuffer::from_buffer(core.clone());
        assert_eq!(js.width(), 20);
        assert_eq!(js.height(), 10);
        assert_eq!(js.to_buffer(), core);
    }

    #[test]
    fn test_reference_from_parts() {
        let dims = JsPixelBuffer::try_new(4, 3, vec![0; 12]).unwrap().dimensions();
        assert_eq!(reference_from_parts(dims, None, None), Ok(None));
        assert_eq!(
            reference_from_parts(dims, Some(3), Some(2)),
            Ok(Some(ReferenceCoordinate::new(3, 2)))
        );
        assert!(reference_from_parts(dims, Some(4), Some(0)).is_err());
        assert!(reference_from_parts(dims, Some(0), Some(3)).is_err());
        assert!(reference_from_parts(dims, Some(1), None).is_err());
        assert!(reference_from_parts(dims, None, Some(1)).is_err());
    }

    #[test]
    fn test_filter_from_u8() {
        assert!(matches!(filter_from_u8(0), FilterType::Nearest));
        assert!(matches!(filter_from_u8(1), FilterType::Bilinear));
        assert!(matches!(filter_from_u8(2), FilterType::Lanczos3));
        // Unknown values default to Bilinear
        assert!(matches!(filter_from_u8(3), FilterType::Bilinear));
        assert!(matches!(filter_from_u8(255), FilterType::Bilinear));
    }
}
