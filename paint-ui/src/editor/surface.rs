// The drawing surface: canvas, tool settings, pointer state and undo history in one place.
// Platform input events map one-to-one onto the methods here.

use egui::Color32;
use paint_core::{History, Snapshot, SnapshotError};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::editor::canvas::CanvasError;
use crate::editor::tools::{Brush, Fill, Tool};
use crate::settings::{EditorSettings, SettingsError, MAX_LINE_WIDTH, MIN_LINE_WIDTH};
use crate::Canvas;

/// Tint of an enabled undo/redo button.
pub const ACTIVE_TINT: Color32 = Color32::from_rgb(0x2c, 0x2c, 0x2c);
/// Tint of a disabled undo/redo button.
pub const DISABLED_TINT: Color32 = Color32::from_rgb(0x94, 0x94, 0x94);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Stroke,
    Fill,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Stroke => Mode::Fill,
            Mode::Fill => Mode::Stroke,
        }
    }

    /// Label of the mode button: it names the mode a click switches to.
    pub fn button_label(self) -> &'static str {
        match self {
            Mode::Stroke => "Fill",
            Mode::Fill => "Paint",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub enabled: bool,
    pub tint: Color32,
}

impl Affordance {
    fn from_enabled(enabled: bool) -> Self {
        Self {
            enabled,
            tint: if enabled { ACTIVE_TINT } else { DISABLED_TINT },
        }
    }
}

/// Button state for undo and redo, refreshed after every mutating call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordances {
    pub undo: Affordance,
    pub redo: Affordance,
}

#[derive(Debug, Clone, Copy)]
struct ActiveStroke {
    last: (u32, u32),
    drew: bool,
}

pub struct Surface {
    canvas: Canvas,
    brush: Brush,
    mode: Mode,
    stroke: Option<ActiveStroke>,
    history: History,
}

impl Surface {
    pub fn new(settings: &EditorSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let background = settings.background_color()?;
        let color = settings.initial_color()?;
        let history = History::with_config(settings.history)?;

        info!(
            "Creating surface {}x{}, brush {} {:?}",
            settings.canvas_width, settings.canvas_height, settings.line_width, color
        );

        Ok(Self {
            canvas: Canvas::new(settings.canvas_width, settings.canvas_height, background),
            brush: Brush::new(settings.line_width, color),
            mode: Mode::Stroke,
            stroke: None,
            history,
        })
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mode_label(&self) -> &'static str {
        self.mode.button_label()
    }

    pub fn color(&self) -> Color32 {
        self.brush.color
    }

    pub fn line_width(&self) -> u32 {
        self.brush.size
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Used by both the brush and the fill.
    pub fn set_color(&mut self, color: Color32) {
        debug!("Color set to {:?}", color);
        self.brush.color = color;
    }

    /// Clamped to the supported range.
    pub fn set_line_width(&mut self, width: u32) {
        let clamped = width.clamp(MIN_LINE_WIDTH, MAX_LINE_WIDTH);
        if clamped != width {
            warn!("Line width {} clamped to {}", width, clamped);
        }
        self.brush.size = clamped;
    }

    /// Switching mode abandons any stroke in progress without recording it.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        if self.stroke.take().is_some() {
            debug!("Dropping active stroke on mode change");
        }
        debug!("Mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    pub fn begin_stroke(&mut self, x: u32, y: u32) {
        if self.mode != Mode::Stroke {
            trace!("Ignoring stroke start in {:?} mode", self.mode);
            return;
        }
        debug!("Stroke started at ({}, {})", x, y);
        self.stroke = Some(ActiveStroke {
            last: (x, y),
            drew: false,
        });
    }

    pub fn extend_stroke(&mut self, x: u32, y: u32) {
        let Some(stroke) = self.stroke.as_mut() else {
            return;
        };
        self.brush
            .stroke_segment(&mut self.canvas, stroke.last, (x, y));
        stroke.last = (x, y);
        stroke.drew = true;
    }

    /// Finish the active stroke. Returns true if it was recorded in the history.
    pub fn end_stroke(&mut self) -> Result<bool, SurfaceError> {
        let Some(stroke) = self.stroke.take() else {
            return Ok(false);
        };
        if !stroke.drew {
            debug!("Stroke ended without drawing");
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    pub fn pointer_down(&mut self, x: u32, y: u32) {
        self.begin_stroke(x, y);
    }

    pub fn pointer_move(&mut self, x: u32, y: u32) {
        self.extend_stroke(x, y);
    }

    pub fn pointer_up(&mut self) -> Result<bool, SurfaceError> {
        self.end_stroke()
    }

    /// Leaving the surface ends the stroke like releasing the pointer.
    pub fn pointer_leave(&mut self) -> Result<bool, SurfaceError> {
        self.end_stroke()
    }

    /// In fill mode a click paints the whole surface. Returns true if recorded.
    pub fn click(&mut self, x: u32, y: u32) -> Result<bool, SurfaceError> {
        if self.mode != Mode::Fill {
            return Ok(false);
        }
        Fill::new(self.brush.color).apply(&mut self.canvas, x, y);
        self.commit()?;
        Ok(true)
    }

    /// A stroke still in progress is finished and recorded first, so undo
    /// always steps back from what is on screen.
    pub fn undo(&mut self) -> Result<Affordances, SurfaceError> {
        if self.end_stroke()? {
            debug!("Recorded active stroke before undo");
        }
        match self.history.undo() {
            Some(snapshot) => self.paint(&snapshot)?,
            None => self.repaint_current()?,
        }
        Ok(self.affordances())
    }

    /// Like undo, finishes an active stroke first; recording it drops the redo states.
    pub fn redo(&mut self) -> Result<Affordances, SurfaceError> {
        if self.end_stroke()? {
            debug!("Recorded active stroke before redo");
        }
        match self.history.redo() {
            Some(snapshot) => self.paint(&snapshot)?,
            None => trace!("Redo had nothing to restore"),
        }
        Ok(self.affordances())
    }

    /// Wipe to the background and start the history over.
    pub fn clear(&mut self) -> Affordances {
        self.stroke = None;
        self.canvas.clear();
        self.history.reset();
        self.affordances()
    }

    pub fn affordances(&self) -> Affordances {
        let status = self.history.status();
        Affordances {
            undo: Affordance::from_enabled(status.can_undo),
            redo: Affordance::from_enabled(status.can_redo),
        }
    }

    fn commit(&mut self) -> Result<(), SurfaceError> {
        let snapshot = self.canvas.snapshot()?;
        self.history.commit(snapshot);
        Ok(())
    }

    fn paint(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        self.canvas.restore(snapshot)?;
        Ok(())
    }

    // Nothing earlier to go back to: show the current state, or the blank
    // background when nothing has been committed.
    fn repaint_current(&mut self) -> Result<(), SurfaceError> {
        match self.history.current().cloned() {
            Some(snapshot) => self.paint(&snapshot),
            None => {
                self.canvas.clear();
                Ok(())
            }
        }
    }
}

/// The canvas and the history disagree about the raster size.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("could not capture canvas: {0}")]
    Capture(#[from] SnapshotError),

    #[error("could not repaint canvas: {0}")]
    Restore(#[from] CanvasError),
}
