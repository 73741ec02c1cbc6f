//! Automatic white balance anchored on a reference pixel.
//!
//! The reference pixel is treated as something that should be neutral. The
//! amount by which each of its channels exceeds its weakest channel is
//! subtracted from every pixel in the image, clamped at zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::{alpha, blue, green, pack_argb, red, PixelBuffer, ReferenceCoordinate};
use crate::parallel::for_each_pixel_mut;
use crate::reference::locate_reference_pixel;

/// Per-channel amount subtracted from every pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorChannelDelta {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl ColorChannelDelta {
    /// Delta that would bring `pixel` to its lowest channel value.
    pub fn from_reference(pixel: u32) -> Self {
        let (r, g, b) = (red(pixel) as i32, green(pixel) as i32, blue(pixel) as i32);
        let low = r.min(g).min(b);
        Self {
            red: r - low,
            green: g - low,
            blue: b - low,
        }
    }

    /// True when all three channels are already equal.
    pub fn is_neutral(&self) -> bool {
        self.red == 0 && self.green == 0 && self.blue == 0
    }

    /// Subtract the delta from one pixel, clamping each channel at zero.
    #[inline]
    pub fn apply_to(&self, pixel: u32) -> u32 {
        let shift = |c: u8, d: i32| (c as i32 - d).clamp(0, 255) as u8;
        pack_argb(
            alpha(pixel),
            shift(red(pixel), self.red),
            shift(green(pixel), self.green),
            shift(blue(pixel), self.blue),
        )
    }
}

/// Color-balance `buffer` in place.
///
/// Uses `reference` when given, otherwise the whitest pixel. Returns the delta
/// that was applied, or `None` if the reference pixel was already neutral
/// (`R == G == B`) and the buffer was left untouched.
///
/// Running this twice without a fixed reference is not idempotent: the second
/// pass may pick a different whitest pixel. Pass the first coordinate back in
/// to get a single deterministic correction.
///
/// # Panics
///
/// Panics if `reference` lies outside the buffer.
pub fn apply_color_balance(
    buffer: &mut PixelBuffer,
    reference: Option<ReferenceCoordinate>,
) -> Option<ColorChannelDelta> {
    let coord = reference.unwrap_or_else(|| locate_reference_pixel(buffer));
    let delta = ColorChannelDelta::from_reference(buffer.pixel_at(coord));

    if delta.is_neutral() {
        debug!(x = coord.x, y = coord.y, "reference pixel neutral, skipping color balance");
        return None;
    }

    debug!(
        x = coord.x,
        y = coord.y,
        red = delta.red,
        green = delta.green,
        blue = delta.blue,
        "applying color balance"
    );
    for_each_pixel_mut(&mut buffer.pixels, |p| *p = delta.apply_to(*p));
    Some(delta)
}

/// Consuming form of [`apply_color_balance`].
pub fn color_balance(mut buffer: PixelBuffer, reference: Option<ReferenceCoordinate>) -> PixelBuffer {
    apply_color_balance(&mut buffer, reference);
    buffer
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=10, 1u32..=10).prop_flat_map(|(w, h)| {
            let len = (w * h) as usize;
            prop::collection::vec(any::<u32>(), len..=len)
                .prop_map(move |pixels| PixelBuffer::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Alpha is never modified.
        #[test]
        fn prop_alpha_preserved(buf in buffer_strategy()) {
            let before = buf.clone();
            let after = color_balance(buf, None);
            for (a, b) in before.pixels.iter().zip(&after.pixels) {
                prop_assert_eq!(alpha(*a), alpha(*b));
            }
        }

        /// Property: Channels only ever decrease, by at most the delta.
        #[test]
        fn prop_channels_never_increase(buf in buffer_strategy()) {
            let before = buf.clone();
            let mut after = buf;
            let delta = apply_color_balance(&mut after, None).unwrap_or_default();
            for (a, b) in before.pixels.iter().zip(&after.pixels) {
                prop_assert!(red(*b) <= red(*a));
                prop_assert!(green(*b) <= green(*a));
                prop_assert!(blue(*b) <= blue(*a));
                prop_assert!((red(*a) - red(*b)) as i32 <= delta.red);
                prop_assert!((green(*a) - green(*b)) as i32 <= delta.green);
                prop_assert!((blue(*a) - blue(*b)) as i32 <= delta.blue);
            }
        }

        /// Property: The reference pixel ends up neutral.
        #[test]
        fn prop_reference_ends_neutral(buf in buffer_strategy()) {
            let reference = locate_reference_pixel(&buf);
            let after = color_balance(buf, Some(reference));
            let p = after.pixel_at(reference);
            prop_assert_eq!(red(p), green(p));
            prop_assert_eq!(green(p), blue(p));
        }
    }
}
