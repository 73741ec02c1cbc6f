//! Retouch Core - reference-pixel image corrections
//!
//! This crate edits a single in-memory raster through a small set of
//! deterministic transformations:
//!
//! - automatic white balance ([`transform::apply_color_balance`])
//! - automatic exposure ([`transform::apply_exposure`])
//! - color inversion ([`transform::invert_colors`])
//! - aspect-preserving downscaling with a codec round-trip ([`resample::resample`])
//!
//! Images are held as packed ARGB [`PixelBuffer`]s. Loading files, orientation
//! correction and display are left to the caller; [`decode`] and [`encode`]
//! cover the PNG/JPEG conversions at that boundary, and [`EditSession`] keeps
//! an original snapshot for undo.
//!
//! # Logging
//!
//! Diagnostic events are emitted through `tracing` at debug level. The crate
//! never installs a subscriber.

pub mod buffer;
pub mod decode;
pub mod encode;
mod parallel;
pub mod reference;
pub mod resample;
pub mod session;
pub mod transform;

pub use buffer::{PixelBuffer, ReferenceCoordinate};
pub use reference::locate_reference_pixel;
pub use resample::{
    resample, resample_with, BoundingBox, ResampleError, ResampleFilter, ResampleOptions,
};
pub use session::{EditSession, SessionError, SessionOptions};
pub use transform::{ColorChannelDelta, Transformation};
