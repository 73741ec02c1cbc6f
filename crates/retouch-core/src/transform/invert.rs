//! Color inversion.

use tracing::debug;

use crate::buffer::{PixelBuffer, RGB_MASK};
use crate::parallel::for_each_pixel_mut;

/// Invert the red, green and blue channels of `buffer` in place.
///
/// Alpha is untouched because the mask's top byte is zero.
pub fn apply_color_invert(buffer: &mut PixelBuffer) {
    debug!(
        width = buffer.width,
        height = buffer.height,
        "inverting colors"
    );
    for_each_pixel_mut(&mut buffer.pixels, |p| *p ^= RGB_MASK);
}

/// Return an inverted copy of `buffer`, leaving the input as it was.
pub fn invert_colors(buffer: &PixelBuffer) -> PixelBuffer {
    let mut inverted = buffer.clone();
    apply_color_invert(&mut inverted);
    inverted
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::alpha;
    use proptest::prelude::*;

    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=16, 1u32..=16).prop_flat_map(|(w, h)| {
            let len = (w * h) as usize;
            prop::collection::vec(any::<u32>(), len..=len)
                .prop_map(move |pixels| PixelBuffer::new(w, h, pixels))
        })
    }

    proptest! {
        /// Property: Inverting twice gives back the original buffer.
        #[test]
        fn prop_double_inversion_is_identity(buf in buffer_strategy()) {
            let twice = invert_colors(&invert_colors(&buf));
            prop_assert_eq!(twice, buf);
        }

        /// Property: Alpha is never modified.
        #[test]
        fn prop_alpha_preserved(buf in buffer_strategy()) {
            let out = invert_colors(&buf);
            for (a, b) in buf.pixels.iter().zip(&out.pixels) {
                prop_assert_eq!(alpha(*a), alpha(*b));
            }
        }
    }
}
