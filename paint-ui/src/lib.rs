//! paint-ui: the PaintJS drawing surface.
//!
//! Owns the raster, the brush/fill settings and the pointer state, and feeds
//! completed actions into the `paint-core` history.

pub mod editor;
pub mod logging;
pub mod settings;

pub use editor::{Affordances, Canvas, Mode, Surface, SurfaceError};
pub use settings::{load_settings, save_settings, EditorSettings, SettingsError};
