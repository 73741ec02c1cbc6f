//! Edit session WASM bindings.
//!
//! A `JsEditSession` keeps the loaded image and the edited result inside
//! WASM memory, so repeated edits do not copy pixels across the boundary.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditSession } from '@retouch/wasm';
//!
//! const session = JsEditSession.open(bytes, 1280, 1280);
//! session.apply_color_balance();
//! session.apply_exposure();
//! if (userClickedUndo) session.undo();
//! const png = session.export_png();
//! ```

use crate::decode::resample_options;
use crate::types::{check_reference, reference_from_parts, JsPixelBuffer};
use retouch_core::encode::OutputFormat;
use retouch_core::{BoundingBox, EditSession, ReferenceCoordinate, SessionOptions, Transformation};
use wasm_bindgen::prelude::*;

/// An image being edited, with one undo snapshot.
#[wasm_bindgen]
pub struct JsEditSession {
    inner: EditSession,
}

#[wasm_bindgen]
impl JsEditSession {
    /// Start a session from an image already in WASM memory.
    #[wasm_bindgen(constructor)]
    pub fn new(image: &JsPixelBuffer) -> JsEditSession {
        Self {
            inner: EditSession::new(image.to_buffer()),
        }
    }

    /// Decode PNG or JPEG bytes and start a session.
    ///
    /// When both `max_width` and `max_height` are given, the image is fit into
    /// that box (bilinear, PNG round-trip) before editing starts.
    pub fn open(
        bytes: &[u8],
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) -> Result<JsEditSession, JsValue> {
        Self::try_open(bytes, max_width, max_height).map_err(|e| JsValue::from_str(&e))
    }

    /// Balance colors against the whitest pixel, or against `(x, y)`.
    ///
    /// Returns `false` if the image was already neutral at that pixel.
    pub fn apply_color_balance(&mut self, x: Option<u32>, y: Option<u32>) -> Result<bool, JsValue> {
        let reference = self.reference(x, y).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.inner.apply(Transformation::ColorBalance { reference }))
    }

    /// Brighten against the whitest pixel, or against `(x, y)`.
    ///
    /// Returns `false` if the reference red channel was already saturated.
    pub fn apply_exposure(&mut self, x: Option<u32>, y: Option<u32>) -> Result<bool, JsValue> {
        let reference = self.reference(x, y).map_err(|e| JsValue::from_str(&e))?;
        Ok(self.inner.apply(Transformation::Exposure { reference }))
    }

    /// Invert the colors of the current image.
    pub fn apply_color_invert(&mut self) -> bool {
        self.inner.apply(Transformation::ColorInvert)
    }

    /// Apply a transformation described as a plain object, e.g.
    /// `{ kind: 'exposure', reference: { x: 3, y: 7 } }`.
    pub fn apply(&mut self, value: JsValue) -> Result<bool, JsValue> {
        let transformation: Transformation = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid transformation: {}", e)))?;
        self.apply_checked(transformation)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Throw away every edit and go back to the loaded image.
    pub fn undo(&mut self) {
        self.inner.undo();
    }

    #[wasm_bindgen(getter)]
    pub fn is_modified(&self) -> bool {
        self.inner.is_modified()
    }

    /// A copy of the edited image.
    pub fn current(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.inner.current().clone())
    }

    /// A copy of the image as loaded.
    pub fn original(&self) -> JsPixelBuffer {
        JsPixelBuffer::from_buffer(self.inner.original().clone())
    }

    /// Encode the edited image as PNG for saving.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export(OutputFormat::Png)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode the edited image as JPEG for sharing. Alpha is dropped.
    pub fn export_jpeg(&self, quality: u8) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export(OutputFormat::Jpeg { quality })
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl JsEditSession {
    fn try_open(
        bytes: &[u8],
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) -> Result<Self, String> {
        let bounds = match (max_width, max_height) {
            (None, None) => None,
            (Some(w), Some(h)) => Some(BoundingBox::new(w, h)),
            _ => return Err("Bounding box needs both max_width and max_height".to_string()),
        };
        let options = SessionOptions {
            bounds,
            resample: resample_options(1, None),
        };
        EditSession::from_encoded(bytes, &options)
            .map(|inner| Self { inner })
            .map_err(|e| e.to_string())
    }

    fn dimensions(&self) -> (u32, u32) {
        let current = self.inner.current();
        (current.width, current.height)
    }

    fn reference(
        &self,
        x: Option<u32>,
        y: Option<u32>,
    ) -> Result<Option<ReferenceCoordinate>, String> {
        reference_from_parts(self.dimensions(), x, y)
    }

    fn apply_checked(&mut self, transformation: Transformation) -> Result<bool, String> {
        if let Some(coord) = transformation.reference() {
            check_reference(self.dimensions(), coord)?;
        }
        Ok(self.inner.apply(transformation))
    }
}
