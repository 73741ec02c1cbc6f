//! Image decoding and scaling for Retouch.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG bytes into packed ARGB buffers
//! - Scaling buffers to exact dimensions or into a bounding box
//!
//! All operations are synchronous and return new buffers without modifying
//! their input.
//!
//! # Examples
//!
//! ```ignore
//! use retouch_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod raster;
mod resize;
mod types;

pub use raster::decode_image;
pub use resize::resize;
pub use types::{DecodeError, FilterType};
