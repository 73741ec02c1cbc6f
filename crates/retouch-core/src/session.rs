//! Single-image edit session with one undo snapshot.
//!
//! The session owns two independent buffers: the original as loaded and the
//! current result. Transformations always apply to the current buffer; undo
//! throws the current buffer away and starts again from a copy of the
//! original. There is no deeper history.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::decode::{decode_image, DecodeError};
use crate::encode::{encode, EncodeError, OutputFormat};
use crate::resample::{resample_with, BoundingBox, ResampleError, ResampleOptions};
use crate::transform::Transformation;

/// Errors surfaced by [`EditSession`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to load image: {0}")]
    Decode(#[from] DecodeError),

    #[error("Failed to resample image: {0}")]
    Resample(#[from] ResampleError),

    #[error("Failed to export image: {0}")]
    Encode(#[from] EncodeError),
}

/// How an encoded image is prepared when a session is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionOptions {
    /// Fit the loaded image into this box before editing. `None` keeps the
    /// decoded size.
    pub bounds: Option<BoundingBox>,
    /// Filter and round-trip codec used when `bounds` is set.
    pub resample: ResampleOptions,
}

/// An image being edited.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: PixelBuffer,
    current: PixelBuffer,
    modified: bool,
}

impl EditSession {
    /// Start a session from an already decoded buffer.
    pub fn new(original: PixelBuffer) -> Self {
        let current = original.clone();
        Self {
            original,
            current,
            modified: false,
        }
    }

    /// Decode `bytes`, optionally fit them into `options.bounds`, and start a
    /// session from the result.
    pub fn from_encoded(bytes: &[u8], options: &SessionOptions) -> Result<Self, SessionError> {
        let mut buffer = decode_image(bytes)?;
        if let Some(bounds) = options.bounds {
            buffer = resample_with(&buffer, bounds, &options.resample)?;
        }
        debug!(
            width = buffer.width,
            height = buffer.height,
            "opened edit session"
        );
        Ok(Self::new(buffer))
    }

    /// Apply one transformation to the current buffer.
    ///
    /// Returns `false` if the transformation short-circuited and left the
    /// pixels as they were.
    ///
    /// # Panics
    ///
    /// Panics if the transformation carries a reference coordinate outside
    /// the current buffer.
    pub fn apply(&mut self, transformation: Transformation) -> bool {
        let changed = transformation.apply(&mut self.current);
        self.modified |= changed;
        debug!(
            transformation = transformation.name(),
            changed,
            "applied transformation"
        );
        changed
    }

    /// Discard every edit and go back to the original.
    pub fn undo(&mut self) {
        self.current.clone_from(&self.original);
        self.modified = false;
        debug!("reverted to original");
    }

    /// Whether any applied transformation changed the pixels since the
    /// session started or was last reverted.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// The image as loaded.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// The image with all edits applied.
    pub fn current(&self) -> &PixelBuffer {
        &self.current
    }

    /// Consume the session, keeping the edited image.
    pub fn into_current(self) -> PixelBuffer {
        self.current
    }

    /// Encode the current image for saving or sharing.
    pub fn export(&self, format: OutputFormat) -> Result<Vec<u8>, SessionError> {
        let bytes = encode(&self.current, format)?;
        debug!(bytes = bytes.len(), mime = format.mime_type(), "exported image");
        Ok(bytes)
    }
}
