//! Bounding-box resampling with a codec round-trip.
//!
//! A buffer is scaled to fit inside a `max_width x max_height` box while
//! keeping its aspect ratio, then encoded and immediately decoded again. The
//! round-trip means the returned pixels are exactly what the persisted or
//! shared file will contain.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::decode::{decode_image, resize, DecodeError, FilterType};
use crate::encode::{encode, EncodeError, OutputFormat};

/// Maximum output dimensions for [`resample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub max_width: u32,
    pub max_height: u32,
}

impl BoundingBox {
    /// Box of `max_width x max_height`. Validity is checked by [`resample`].
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width,
            max_height,
        }
    }

    /// Both sides are at least 1.
    pub fn is_valid(&self) -> bool {
        self.max_width >= 1 && self.max_height >= 1
    }
}

/// Interpolating filters accepted by the resampler.
///
/// Nearest-neighbour is left out; use [`crate::decode::resize`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResampleFilter {
    #[default]
    Bilinear,
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Bilinear => FilterType::Bilinear,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Filter and codec used by [`resample_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleOptions {
    /// Scaling filter. Defaults to bilinear.
    pub filter: ResampleFilter,
    /// Format for the encode/decode round-trip. Defaults to PNG.
    pub format: OutputFormat,
}

/// Errors from [`resample`].
#[derive(Debug, Error)]
pub enum ResampleError {
    /// The bounding box has a zero side.
    #[error("Invalid argument: bounding box {max_width}x{max_height} must be at least 1x1")]
    InvalidArgument { max_width: u32, max_height: u32 },

    /// Encoding the scaled buffer failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Scaling or decoding the round-tripped bytes failed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Dimensions of a `width x height` image scaled to fit `bounds`.
///
/// Whichever side of the box is the tighter fit is used in full and the other
/// side follows the image's aspect ratio, rounded to the nearest pixel and
/// never below 1. Images smaller than the box are scaled up.
pub fn fit_dimensions(width: u32, height: u32, bounds: BoundingBox) -> (u32, u32) {
    let ratio_image = width as f64 / height as f64;
    let ratio_box = bounds.max_width as f64 / bounds.max_height as f64;

    if ratio_box > ratio_image {
        // Height is the binding constraint
        let new_width = (bounds.max_height as f64 * ratio_image).round() as u32;
        (new_width.max(1), bounds.max_height)
    } else {
        // Width is the binding constraint
        let new_height = (bounds.max_width as f64 / ratio_image).round() as u32;
        (bounds.max_width, new_height.max(1))
    }
}

/// Scale `buffer` into `bounds` with the default options (bilinear, PNG).
///
/// # Errors
///
/// Returns `ResampleError::InvalidArgument` without doing any work if either
/// side of `bounds` is zero. Codec failures are passed through unchanged.
pub fn resample(buffer: &PixelBuffer, bounds: BoundingBox) -> Result<PixelBuffer, ResampleError> {
    resample_with(buffer, bounds, &ResampleOptions::default())
}

/// Scale `buffer` into `bounds`, then round-trip it through `options.format`.
pub fn resample_with(
    buffer: &PixelBuffer,
    bounds: BoundingBox,
    options: &ResampleOptions,
) -> Result<PixelBuffer, ResampleError> {
    if !bounds.is_valid() {
        return Err(ResampleError::InvalidArgument {
            max_width: bounds.max_width,
            max_height: bounds.max_height,
        });
    }

    let (width, height) = fit_dimensions(buffer.width, buffer.height, bounds);
    debug!(
        from_width = buffer.width,
        from_height = buffer.height,
        width,
        height,
        filter = ?options.filter,
        "resampling"
    );

    let scaled = resize(buffer, width, height, options.filter.into())?;
    let bytes = encode(&scaled, options.format)?;
    debug!(bytes = bytes.len(), format = ?options.format, "codec round-trip");
    Ok(decode_image(&bytes)?)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: The result always fits in the box and touches one side.
        #[test]
        fn prop_fit_within_box(
            width in 1u32..=4000,
            height in 1u32..=4000,
            max_width in 1u32..=2000,
            max_height in 1u32..=2000,
        ) {
            let (w, h) = fit_dimensions(width, height, BoundingBox::new(max_width, max_height));
            prop_assert!(w >= 1 && h >= 1);
            prop_assert!(w <= max_width, "width {} exceeds {}", w, max_width);
            prop_assert!(h <= max_height, "height {} exceeds {}", h, max_height);
            prop_assert!(w == max_width || h == max_height);
        }
    }
}
