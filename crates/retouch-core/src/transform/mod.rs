//! Pixel transformations: color balance, exposure and color inversion.
//!
//! Each transformation is a whole-image, per-pixel operation with no
//! dependency between pixels. Color balance and exposure are anchored on a
//! reference pixel, which defaults to the whitest pixel of the image.
//!
//! # Ownership
//!
//! The `apply_*` functions mutate a buffer the caller owns. Callers that want
//! to keep an untouched snapshot (for undo) clone first, or use
//! [`Transformation::applied_to`], which does exactly that.

mod color_balance;
mod exposure;
mod invert;

pub use color_balance::{apply_color_balance, color_balance, ColorChannelDelta};
pub use exposure::{apply_exposure, exposure};
pub use invert::{apply_color_invert, invert_colors};

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, ReferenceCoordinate};

/// One user-triggered edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transformation {
    /// Remove the color cast of the reference pixel from the whole image.
    ColorBalance {
        #[serde(default)]
        reference: Option<ReferenceCoordinate>,
    },
    /// Brighten the image until the reference pixel's red channel saturates.
    Exposure {
        #[serde(default)]
        reference: Option<ReferenceCoordinate>,
    },
    /// Invert red, green and blue.
    ColorInvert,
}

impl Transformation {
    /// Color balance anchored on the whitest pixel.
    pub fn auto_color_balance() -> Self {
        Transformation::ColorBalance { reference: None }
    }

    /// Exposure anchored on the whitest pixel.
    pub fn auto_exposure() -> Self {
        Transformation::Exposure { reference: None }
    }

    /// Short stable name, used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Transformation::ColorBalance { .. } => "color_balance",
            Transformation::Exposure { .. } => "exposure",
            Transformation::ColorInvert => "color_invert",
        }
    }

    /// The explicit reference coordinate, if this variant carries one.
    pub fn reference(&self) -> Option<ReferenceCoordinate> {
        match self {
            Transformation::ColorBalance { reference } | Transformation::Exposure { reference } => {
                *reference
            }
            Transformation::ColorInvert => None,
        }
    }

    /// Apply to `buffer` in place. Returns `true` if any pixel may have changed,
    /// `false` when the transformation short-circuited.
    ///
    /// # Panics
    ///
    /// Panics if an explicit reference coordinate lies outside the buffer.
    pub fn apply(&self, buffer: &mut PixelBuffer) -> bool {
        match *self {
            Transformation::ColorBalance { reference } => {
                apply_color_balance(buffer, reference).is_some()
            }
            Transformation::Exposure { reference } => apply_exposure(buffer, reference).is_some(),
            Transformation::ColorInvert => {
                apply_color_invert(buffer);
                true
            }
        }
    }

    /// Apply to a copy of `source`, leaving `source` as it was.
    pub fn applied_to(&self, source: &PixelBuffer) -> PixelBuffer {
        let mut out = source.clone();
        self.apply(&mut out);
        out
    }
}
