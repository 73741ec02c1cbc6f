//! WASM bindings for the pixel transformations.
//!
//! Every function returns a new `JsPixelBuffer` and leaves its input alone, so
//! the host can keep the previous image around for undo.

use crate::types::{check_reference, reference_from_parts, JsPixelBuffer, JsReferenceCoordinate};
use retouch_core::transform::{apply_color_balance as core_balance, apply_exposure as core_exposure};
use retouch_core::Transformation;
use wasm_bindgen::prelude::*;

/// Find the whitest pixel of an image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const { x, y } = locate_reference_pixel(image);
/// ```
#[wasm_bindgen]
pub fn locate_reference_pixel(image: &JsPixelBuffer) -> JsReferenceCoordinate {
    retouch_core::locate_reference_pixel(&image.to_buffer()).into()
}

/// Apply automatic color balance.
///
/// Pass `x` and `y` to anchor on a specific pixel, or omit both to use the
/// whitest pixel.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const balanced = apply_color_balance(image);
/// const pinned = apply_color_balance(image, 12, 40);
/// ```
#[wasm_bindgen]
pub fn apply_color_balance(
    image: &JsPixelBuffer,
    x: Option<u32>,
    y: Option<u32>,
) -> Result<JsPixelBuffer, JsValue> {
    let reference = reference_from_parts(image.dimensions(), x, y).map_err(|e| JsValue::from_str(&e))?;
    let mut buffer = image.to_buffer();
    core_balance(&mut buffer, reference);
    Ok(JsPixelBuffer::from_buffer(buffer))
}

/// Apply automatic exposure.
///
/// Pass `x` and `y` to anchor on a specific pixel, or omit both to use the
/// whitest pixel.
#[wasm_bindgen]
pub fn apply_exposure(
    image: &JsPixelBuffer,
    x: Option<u32>,
    y: Option<u32>,
) -> Result<JsPixelBuffer, JsValue> {
    let reference = reference_from_parts(image.dimensions(), x, y).map_err(|e| JsValue::from_str(&e))?;
    let mut buffer = image.to_buffer();
    core_exposure(&mut buffer, reference);
    Ok(JsPixelBuffer::from_buffer(buffer))
}

/// Invert the colors of an image. Alpha is kept.
#[wasm_bindgen]
pub fn apply_color_invert(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(retouch_core::transform::invert_colors(&image.to_buffer()))
}

/// Apply a transformation described as a plain object.
///
/// # Example (TypeScript)
///
/// ```typescript
/// apply_transformation(image, { kind: 'color_invert' });
/// apply_transformation(image, { kind: 'exposure', reference: { x: 3, y: 7 } });
/// ```
#[wasm_bindgen]
pub fn apply_transformation(image: &JsPixelBuffer, value: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let transformation: Transformation = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid transformation: {}", e)))?;
    transform_checked(image, transformation).map_err(|e| JsValue::from_str(&e))
}

/// Validate the reference coordinate, then apply to a copy of `image`.
pub(crate) fn transform_checked(
    image: &JsPixelBuffer,
    transformation: Transformation,
) -> Result<JsPixelBuffer, String> {
    if let Some(coord) = transformation.reference() {
        check_reference(image.dimensions(), coord)?;
    }
    Ok(JsPixelBuffer::from_buffer(
        transformation.applied_to(&image.to_buffer()),
    ))
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_color_balance_auto() {
        let img = JsPixelBuffer::new(1, 1, vec![0xFF5A_3C1E]).unwrap();
        let out = apply_color_balance(&img, None, None).unwrap();
        assert_eq!(out.pixels(), vec![0xFF1E_1E1E]);
    }

    #[wasm_bindgen_test]
    fn test_exposure_out_of_bounds_is_error() {
        let img = JsPixelBuffer::new(1, 1, vec![0xFF00_0000]).unwrap();
        assert!(apply_exposure(&img, Some(1), Some(0)).is_err());
    }

    #[wasm_bindgen_test]
    fn test_apply_transformation_from_object() {
        let img = JsPixelBuffer::new(1, 1, vec![0xFF00_0000]).unwrap();
        let value = serde_wasm_bindgen::to_value(&Transformation::ColorInvert).unwrap();
        let out = apply_transformation(&img, value).unwrap();
        assert_eq!(out.pixels(), vec![0xFFFF_FFFF]);
    }
}
