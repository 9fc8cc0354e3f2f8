//! Immutable raster captures.
//!
//! A snapshot is produced by the drawing surface after each completed action.
//! Clones share one buffer, and equality compares the pixel bytes.

use std::sync::Arc;
use thiserror::Error;

/// RGBA8.
pub const BYTES_PER_PIXEL: usize = 4;

/// Full raster state of the surface at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl Snapshot {
    /// Wrap a raster. Rejects zero-sized rasters and buffers whose length
    /// does not match `width * height * BYTES_PER_PIXEL`.
    pub fn new(
        width: u32,
        height: u32,
        rgba: impl Into<Arc<[u8]>>,
    ) -> Result<Self, SnapshotError> {
        if width == 0 || height == 0 {
            return Err(SnapshotError::ZeroSized { width, height });
        }

        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(SnapshotError::TooLarge { width, height })?;

        let rgba = rgba.into();
        if rgba.len() != expected {
            return Err(SnapshotError::LengthMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            });
        }

        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.rgba
    }

    pub fn pixel_count(&self) -> usize {
        self.rgba.len() / BYTES_PER_PIXEL
    }

    /// True when both snapshots point at the same buffer, not just equal bytes.
    pub fn shares_buffer(&self, other: &Snapshot) -> bool {
        Arc::ptr_eq(&self.rgba, &other.rgba)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("snapshot must have non-zero size, got {width}x{height}")]
    ZeroSized { width: u32, height: u32 },

    #[error("snapshot of {width}x{height} is too large to address")]
    TooLarge { width: u32, height: u32 },

    #[error("snapshot {width}x{height} needs {expected} bytes, got {actual}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
