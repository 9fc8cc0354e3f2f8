// Editor module for PaintJS.

pub mod canvas;
pub mod surface;
pub mod tools;

pub use canvas::{Canvas, CanvasError};
pub use surface::{Affordance, Affordances, Mode, Surface, SurfaceError};
pub use tools::{Brush, Fill, Tool};
