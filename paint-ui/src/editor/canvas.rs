// Raster drawing surface for PaintJS.
// Holds the pixels the tools paint into and converts them to/from history snapshots.

use egui::Color32;
use paint_core::{Snapshot, SnapshotError, BYTES_PER_PIXEL};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

pub const DEFAULT_CANVAS_SIZE: u32 = 500;

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color32,
    pixels: Vec<Color32>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        info!(
            "Creating new canvas of size {}x{} with background color {:?}",
            width, height, background
        );

        let total_pixels = width as usize * height as usize;
        debug!("Total pixels to initialize: {}", total_pixels);

        Self {
            width,
            height,
            background,
            pixels: vec![background; total_pixels],
        }
    }

    fn is_valid_coordinate(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    //convert 2d coordinates to 1d index
    fn coord_to_index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if !self.is_valid_coordinate(x, y) {
            warn!(
                "Requested pixel color at invalid coordinates ({}, {})",
                x, y
            );
            return None;
        }

        Some(self.pixels[self.coord_to_index(x, y)])
    }

    /// Returns false when the coordinates fall outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color32) -> bool {
        if !self.is_valid_coordinate(x, y) {
            trace!("Skipping out-of-bounds pixel ({}, {})", x, y);
            return false;
        }

        let index = self.coord_to_index(x, y);
        self.pixels[index] = color;
        true
    }

    pub fn fill(&mut self, color: Color32) {
        info!("Filling canvas {:?}", color);
        self.pixels.fill(color);
    }

    /// Back to the background the canvas was created with.
    pub fn clear(&mut self) {
        info!("Clearing canvas");
        self.fill(self.background);
    }

    /// Capture the current raster for the history.
    pub fn snapshot(&self) -> Result<Snapshot, SnapshotError> {
        let mut rgba = Vec::with_capacity(self.pixels.len() * BYTES_PER_PIXEL);
        for pixel in &self.pixels {
            rgba.extend_from_slice(&pixel.to_array());
        }
        trace!("Captured {} bytes", rgba.len());
        Snapshot::new(self.width, self.height, rgba)
    }

    /// Replace every pixel with the contents of `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), CanvasError> {
        if snapshot.width() != self.width || snapshot.height() != self.height {
            warn!(
                "Refusing to restore {}x{} snapshot onto {}x{} canvas",
                snapshot.width(),
                snapshot.height(),
                self.width,
                self.height
            );
            return Err(CanvasError::SizeMismatch {
                expected: (self.width, self.height),
                actual: (snapshot.width(), snapshot.height()),
            });
        }

        for (pixel, rgba) in self
            .pixels
            .iter_mut()
            .zip(snapshot.as_bytes().chunks_exact(BYTES_PER_PIXEL))
        {
            *pixel = Color32::from_rgba_premultiplied(rgba[0], rgba[1], rgba[2], rgba[3]);
        }
        debug!("Canvas restored from snapshot");
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color32 {
        self.background
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE, Color32::WHITE)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("snapshot is {}x{}, canvas is {}x{}", .actual.0, .actual.1, .expected.0, .expected.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}
