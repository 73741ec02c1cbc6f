//! Automatic exposure anchored on a reference pixel.
//!
//! Every pixel is brightened by the amount needed to push the reference
//! pixel's red channel to full intensity. Channels saturate at 255.

use tracing::debug;

use crate::buffer::{alpha, blue, green, pack_argb, red, PixelBuffer, ReferenceCoordinate};
use crate::parallel::for_each_pixel_mut;
use crate::reference::{locate_reference_pixel, reference_brightness};

/// Brighten `buffer` in place.
///
/// The additive term is `255 - R(ref)`, so the reference red channel lands on
/// 255 and nothing is ever darkened. Returns the term that was added, or
/// `None` when the reference red channel was already 255 and the buffer was
/// left untouched.
///
/// # Panics
///
/// Panics if `reference` lies outside the buffer.
pub fn apply_exposure(
    buffer: &mut PixelBuffer,
    reference: Option<ReferenceCoordinate>,
) -> Option<u8> {
    let coord = reference.unwrap_or_else(|| locate_reference_pixel(buffer));
    let reference_red = red(buffer.pixel_at(coord));

    if reference_red == u8::MAX {
        debug!(x = coord.x, y = coord.y, "reference pixel saturated, skipping exposure");
        return None;
    }

    let adjust = u8::MAX - reference_red;
    debug!(
        x = coord.x,
        y = coord.y,
        brightness = reference_brightness(buffer, coord),
        adjust,
        "applying exposure"
    );
    for_each_pixel_mut(&mut buffer.pixels, |p| {
        *p = pack_argb(
            alpha(*p),
            red(*p).saturating_add(adjust),
            green(*p).saturating_add(adjust),
            blue(*p).saturating_add(adjust),
        )
    });
    Some(adjust)
}

/// Consuming form of [`apply_exposure`].
pub fn exposure(mut buffer: PixelBuffer, reference: Option<ReferenceCoordinate>) -> PixelBuffer {
    apply_exposure(&mut buffer, reference);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
        pack_argb(a, r, g, b)
    }

    #[test]
    fn test_exposure_brightens_to_reference() {
        let mut buf = PixelBuffer::new(
            3,
            1,
            vec![argb(255, 10, 20, 30), argb(255, 200, 190, 180), argb(64, 100, 250, 0)],
        );
        let adjust = apply_exposure(&mut buf, None);
        assert_eq!(adjust, Some(55));
        assert_eq!(
            buf.pixels,
            vec![argb(255, 65, 75, 85), argb(255, 255, 245, 235), argb(64, 155, 255, 55)]
        );
    }

    #[test]
    fn test_exposure_short_circuit() {
        let pixels = vec![argb(255, 255, 0, 0), argb(10, 1, 2, 3)];
        let mut buf = PixelBuffer::new(2, 1, pixels.clone());
        assert_eq!(apply_exposure(&mut buf, None), None);
        assert_eq!(buf.pixels, pixels);
    }

    #[test]
    fn test_exposure_uses_red_channel_only() {
        // Whitest pixel is blue-heavy; its red channel drives the adjustment
        let mut buf = PixelBuffer::new(1, 1, vec![argb(255, 100, 200, 250)]);
        assert_eq!(apply_exposure(&mut buf, None), Some(155));
        assert_eq!(buf.pixels[0], argb(255, 255, 255, 255));
    }

    #[test]
    fn test_exposure_explicit_reference() {
        let mut buf = PixelBuffer::new(2, 1, vec![argb(255, 250, 250, 250), argb(255, 5, 5, 5)]);
        let reference = ReferenceCoordinate::new(1, 0);
        assert_eq!(apply_exposure(&mut buf, Some(reference)), Some(250));
        assert_eq!(buf.pixels[0], argb(255, 255, 255, 255));
        assert_eq!(red(buf.pixel_at(reference)), 255);
    }

    #[test]
    fn test_exposure_all_black() {
        let buf = PixelBuffer::filled(2, 2, argb(255, 0, 0, 0));
        let out = exposure(buf, None);
        assert!(out.pixels.iter().all(|&p| p == argb(255, 255, 255, 255)));
    }
}
