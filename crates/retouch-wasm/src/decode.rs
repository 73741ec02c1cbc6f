//! Image loading and resampling WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode PNG or JPEG bytes into a pixel buffer
//! - [`resize`] - Resize an image to exact dimensions
//! - [`resample`] - Fit an image into a bounding box, with a codec round-trip
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, resample } from '@retouch/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const preview = resample(image, 1280, 1280, 1);
//! console.log(`Preview: ${preview.width}x${preview.height}`);
//! ```

use crate::types::{filter_from_u8, JsPixelBuffer};
use retouch_core::decode;
use retouch_core::encode::OutputFormat;
use retouch_core::{BoundingBox, ResampleFilter, ResampleOptions};
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// The format is detected from the content. The result always has an alpha
/// channel; JPEG input decodes as fully opaque.
///
/// # Errors
///
/// Returns an error if the format is not recognised or the data is corrupt.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Resize an image to exact dimensions, ignoring aspect ratio.
///
/// * `filter` - 0=Nearest, 1=Bilinear (default), 2=Lanczos3
#[wasm_bindgen]
pub fn resize(
    image: &JsPixelBuffer,
    width: u32,
    height: u32,
    filter: u8,
) -> Result<JsPixelBuffer, JsValue> {
    decode::resize(&image.to_buffer(), width, height, filter_from_u8(filter))
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Fit an image into `max_width x max_height`, preserving aspect ratio.
///
/// The scaled image is encoded and decoded again so the result matches what
/// a saved file would contain. PNG is used unless `jpeg_quality` is given.
/// Small images are scaled up to touch the box.
///
/// # Arguments
///
/// * `image` - The source image
/// * `max_width`, `max_height` - Bounding box, both at least 1
/// * `filter` - 2=Lanczos3, anything else Bilinear
/// * `jpeg_quality` - Round-trip through JPEG at this quality instead of PNG
///
/// # Example
///
/// ```typescript
/// const lossless = resample(image, 800, 800, 1);
/// const lossy = resample(image, 800, 800, 1, 85);
/// ```
#[wasm_bindgen]
pub fn resample(
    image: &JsPixelBuffer,
    max_width: u32,
    max_height: u32,
    filter: u8,
    jpeg_quality: Option<u8>,
) -> Result<JsPixelBuffer, JsValue> {
    resample_inner(image, max_width, max_height, filter, jpeg_quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Map a u8 filter value to an interpolating resample filter.
///
/// Nearest-neighbour is not offered here, so 0 and unknown values fall back
/// to Bilinear.
pub(crate) fn resample_filter_from_u8(value: u8) -> ResampleFilter {
    match value {
        2 => ResampleFilter::Lanczos3,
        _ => ResampleFilter::Bilinear,
    }
}

pub(crate) fn resample_options(filter: u8, jpeg_quality: Option<u8>) -> ResampleOptions {
    ResampleOptions {
        filter: resample_filter_from_u8(filter),
        format: match jpeg_quality {
            Some(quality) => OutputFormat::Jpeg { quality },
            None => OutputFormat::Png,
        },
    }
}

fn resample_inner(
    image: &JsPixelBuffer,
    max_width: u32,
    max_height: u32,
    filter: u8,
    jpeg_quality: Option<u8>,
) -> Result<JsPixelBuffer, retouch_core::ResampleError> {
    let options = resample_options(filter, jpeg_quality);
    retouch_core::resample_with(
        &image.to_buffer(),
        BoundingBox::new(max_width, max_height),
        &options,
    )
    .map(JsPixelBuffer::from_buffer)
}
