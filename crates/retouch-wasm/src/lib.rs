//! Retouch WASM - WebAssembly bindings for Retouch
//!
//! This crate exposes the retouch-core transformations to JavaScript and
//! TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel buffers
//! - `decode` - Image decoding and bounding-box resampling
//! - `encode` - PNG and JPEG export
//! - `transform` - Color balance, exposure and color inversion
//! - `session` - Edit session with undo
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_color_balance } from '@retouch/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const balanced = apply_color_balance(image);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, resample, resize};
pub use encode::{encode_jpeg, encode_png};
pub use session::JsEditSession;
pub use transform::{
    apply_color_balance, apply_color_invert, apply_exposure, apply_transformation,
    locate_reference_pixel,
};
pub use types::{JsPixelBuffer, JsReferenceCoordinate};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
