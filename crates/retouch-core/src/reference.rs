//! Reference pixel selection.
//!
//! Color balance and exposure both anchor their correction on a single
//! "white" pixel. Unless the caller picks one, the brightest pixel of the
//! image is used, where brightness is the plain mean of red, green and blue.

use tracing::debug;

use crate::buffer::{blue, green, red, PixelBuffer, ReferenceCoordinate};
use crate::parallel::first_max_by_key;

/// Sum of the three color channels. Alpha is ignored.
#[inline]
fn channel_sum(pixel: u32) -> u16 {
    red(pixel) as u16 + green(pixel) as u16 + blue(pixel) as u16
}

/// Mean of the red, green and blue channels of a packed pixel.
#[inline]
pub fn brightness(pixel: u32) -> f64 {
    channel_sum(pixel) as f64 / 3.0
}

/// Find the whitest pixel of `buffer`.
///
/// Scans every pixel once in row-major order and returns the coordinate with
/// the highest `(R + G + B) / 3`. When several pixels share the maximum the
/// first one in scan order wins, so a uniform image yields `(0, 0)`.
///
/// The comparison runs on the integer channel sum, which orders pixels exactly
/// like the mean without floating point rounding.
pub fn locate_reference_pixel(buffer: &PixelBuffer) -> ReferenceCoordinate {
    let index = first_max_by_key(&buffer.pixels, channel_sum).unwrap_or(0);
    let coord = buffer.coordinate_of(index);
    debug!(
        x = coord.x,
        y = coord.y,
        brightness = reference_brightness(buffer, coord),
        "located reference pixel"
    );
    coord
}

/// Brightness of the pixel at `coord`.
///
/// # Panics
///
/// Panics if `coord` lies outside the buffer.
pub fn reference_brightness(buffer: &PixelBuffer, coord: ReferenceCoordinate) -> f64 {
    brightness(buffer.pixel_at(coord))
}
