//! Packed ARGB pixel buffer shared by every transformation.
//!
//! Pixels are stored as one `u32` per pixel with alpha in the most significant
//! byte, followed by red, green and blue. Rows are laid out top to bottom, so
//! the pixel at `(x, y)` lives at index `y * width + x`.

use serde::{Deserialize, Serialize};

/// Mask covering the red, green and blue bytes of a packed pixel.
pub const RGB_MASK: u32 = 0x00FF_FFFF;

/// Alpha channel of a packed ARGB pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    (pixel >> 24) as u8
}

/// Red channel of a packed ARGB pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    (pixel >> 16) as u8
}

/// Green channel of a packed ARGB pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    (pixel >> 8) as u8
}

/// Blue channel of a packed ARGB pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    pixel as u8
}

/// Pack four 8-bit channels into one ARGB pixel.
#[inline]
pub fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// A pixel position inside one specific [`PixelBuffer`].
///
/// Coordinates are zero-based. A coordinate computed for one buffer carries no
/// meaning for another buffer of different dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ReferenceCoordinate {
    /// Column, `0 <= x < width`.
    pub x: u32,
    /// Row, `0 <= y < height`.
    pub y: u32,
}

impl ReferenceCoordinate {
    /// Coordinate of column `x`, row `y`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A decoded raster held as packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// ARGB pixels in row-major order.
    /// Length should be width * height.
    pub pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer from dimensions and packed pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        assert!(
            width > 0 && height > 0,
            "Pixel buffer dimensions must be non-zero, got {width}x{height}"
        );
        assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer where every pixel has the same ARGB value.
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        Self::new(width, height, vec![argb; width as usize * height as usize])
    }

    /// Create a buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .into_raw()
            .chunks_exact(4)
            .map(|c| pack_argb(c[3], c[0], c[1], c[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Unpack into interleaved RGBA bytes (4 bytes per pixel).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &p in &self.pixels {
            bytes.extend_from_slice(&[red(p), green(p), blue(p), alpha(p)]);
        }
        bytes
    }

    /// Unpack into interleaved RGB bytes (3 bytes per pixel), dropping alpha.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for &p in &self.pixels {
            bytes.extend_from_slice(&[red(p), green(p), blue(p)]);
        }
        bytes
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Linear index of `(x, y)`.
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Coordinate of a linear index.
    #[inline]
    pub fn coordinate_of(&self, index: usize) -> ReferenceCoordinate {
        let width = self.width as usize;
        ReferenceCoordinate::new((index % width) as u32, (index / width) as u32)
    }

    /// Whether `coord` lies inside this buffer.
    pub fn contains(&self, coord: ReferenceCoordinate) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    /// Packed pixel at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the buffer.
    pub fn pixel_at(&self, coord: ReferenceCoordinate) -> u32 {
        assert!(
            self.contains(coord),
            "Coordinate ({}, {}) is outside the {}x{} buffer",
            coord.x,
            coord.y,
            self.width,
            self.height
        );
        self.pixels[self.index_of(coord.x, coord.y)]
    }
}
