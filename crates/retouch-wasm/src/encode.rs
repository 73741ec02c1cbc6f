//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode an image to lossless PNG bytes
//! - [`encode_jpeg`] - Encode an image to JPEG bytes (alpha is dropped)
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@retouch/wasm';
//!
//! const png = encode_png(image);
//! const jpeg = encode_jpeg(image, 90);
//! ```

use crate::types::JsPixelBuffer;
use retouch_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes, keeping the alpha channel.
///
/// # Example
///
/// ```typescript
/// const png = encode_png(image);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&image.to_buffer()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode
/// * `quality` - JPEG quality, clamped to 1-100 (recommended: 90)
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival
/// * 80-90: Good quality, recommended for sharing
/// * Below 60: Low quality, visible artifacts
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(&image.to_buffer(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}
