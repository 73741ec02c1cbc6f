//! Exact-size scaling of pixel buffers.
//!
//! Uses the `image` crate's resampling filters on a premultiplied RGBA view of
//! the buffer. Color is weighted by alpha while filtering, so fully
//! transparent pixels contribute no color to their opaque neighbours.

use image::RgbaImage;

use super::{DecodeError, FilterType};
use crate::buffer::{alpha, blue, green, red, PixelBuffer};

/// `c * a / 255`, rounded.
#[inline]
fn premultiply(c: u8, a: u8) -> u8 {
    ((c as u32 * a as u32 + 127) / 255) as u8
}

/// Inverse of [`premultiply`], rounded and clamped. Zero alpha stays black.
#[inline]
fn unpremultiply(c: u8, a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    ((c as u32 * 255 + a as u32 / 2) / a as u32).min(255) as u8
}

fn to_premultiplied(image: &PixelBuffer) -> Option<RgbaImage> {
    let mut bytes = Vec::with_capacity(image.pixels.len() * 4);
    for &p in &image.pixels {
        let a = alpha(p);
        bytes.extend_from_slice(&[
            premultiply(red(p), a),
            premultiply(green(p), a),
            premultiply(blue(p), a),
            a,
        ]);
    }
    RgbaImage::from_raw(image.width, image.height, bytes)
}

fn from_premultiplied(mut img: RgbaImage) -> PixelBuffer {
    for px in img.pixels_mut() {
        let [r, g, b, a] = px.0;
        px.0 = [unpremultiply(r, a), unpremultiply(g, a), unpremultiply(b, a), a];
    }
    PixelBuffer::from_rgba_image(img)
}

/// Resize a buffer to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source buffer to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if either target dimension is zero, and
/// `DecodeError::CorruptedFile` if the source pixels do not match its
/// dimensions.
pub fn resize(
    image: &PixelBuffer,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<PixelBuffer, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let premultiplied = to_premultiplied(image)
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbaImage".to_string()))?;

    let resized = image::imageops::resize(&premultiplied, width, height, filter.to_image_filter());

    Ok(from_premultiplied(resized))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::pack_argb;

    fn create_test_image(width: u32, height: u32) -> PixelBuffer {
        // Create a simple gradient image for testing
        let mut pixels = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let r = ((x * 255) / width.max(1)) as u8;
                let g = ((y * 255) / height.max(1)) as u8;
                pixels.push(pack_argb(255, r, g, 128));
            }
        }
        PixelBuffer::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(50, 25);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_uniform_color_is_stable() {
        let img = PixelBuffer::filled(40, 40, pack_argb(255, 10, 20, 30));
        let resized = resize(&img, 10, 10, FilterType::Bilinear).unwrap();
        assert!(resized.pixels.iter().all(|&p| p == pack_argb(255, 10, 20, 30)));
    }

    #[test]
    fn test_transparent_neighbour_does_not_darken() {
        let img = PixelBuffer::new(2, 1, vec![pack_argb(255, 255, 0, 0), pack_argb(0, 0, 0, 0)]);
        let resized = resize(&img, 1, 1, FilterType::Bilinear).unwrap();
        let p = resized.pixels[0];
        assert!((127..=128).contains(&alpha(p)), "alpha {}", alpha(p));
        assert_eq!((red(p), green(p), blue(p)), (255, 0, 0));
    }

    #[test]
    fn test_premultiply_round_trip_opaque_is_exact() {
        for c in 0..=255u8 {
            assert_eq!(unpremultiply(premultiply(c, 255), 255), c);
        }
        assert_eq!(premultiply(200, 0), 0);
        assert_eq!(unpremultiply(0, 0), 0);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
