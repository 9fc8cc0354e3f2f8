//! Editor settings for PaintJS.
//!
//! Settings are plain JSON so they can be edited by hand. Every field has a
//! default, so a partial file (or `{}`) is valid.

use anyhow::Context;
use egui::Color32;
use paint_core::HistoryConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::editor::canvas::DEFAULT_CANVAS_SIZE;

/// File extension recommended for saved settings.
pub const SETTINGS_FILE_EXT: &str = "paint.json";

pub const INITIAL_COLOR: &str = "#2c2c2c";
pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_LINE_WIDTH: u32 = 10;
pub const MIN_LINE_WIDTH: u32 = 1;
pub const MAX_LINE_WIDTH: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Hex color, e.g. `#ffffff`.
    pub background: String,
    /// Hex color the brush and fill start with.
    pub initial_color: String,
    pub line_width: u32,
    pub history: HistoryConfig,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_SIZE,
            canvas_height: DEFAULT_CANVAS_SIZE,
            background: BACKGROUND_COLOR.to_string(),
            initial_color: INITIAL_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            history: HistoryConfig::default(),
        }
    }
}

impl EditorSettings {
    pub fn background_color(&self) -> Result<Color32, SettingsError> {
        parse_color(&self.background)
    }

    pub fn initial_color(&self) -> Result<Color32, SettingsError> {
        parse_color(&self.initial_color)
    }

    /// Check every field, reporting the first problem found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(SettingsError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&self.line_width) {
            return Err(SettingsError::LineWidthOutOfRange {
                width: self.line_width,
            });
        }
        self.background_color()?;
        self.initial_color()?;
        self.history.validate()?;
        Ok(())
    }
}

pub fn parse_color(value: &str) -> Result<Color32, SettingsError> {
    Color32::from_hex(value).map_err(|err| SettingsError::InvalidColor {
        value: value.to_string(),
        reason: format!("{err:?}"),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("canvas must have non-zero size, got {width}x{height}")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("line width {width} outside {}..={}", MIN_LINE_WIDTH, MAX_LINE_WIDTH)]
    LineWidthOutOfRange { width: u32 },

    #[error("invalid color {value:?}: {reason}")]
    InvalidColor { value: String, reason: String },

    #[error(transparent)]
    History(#[from] paint_core::HistoryError),
}

/// Save settings to disk as pretty JSON.
pub fn save_settings(path: impl AsRef<Path>, settings: &EditorSettings) -> anyhow::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create parent dir: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(settings).context("serialize settings to json")?;
    fs::write(path, json).with_context(|| format!("write settings file: {}", path.display()))?;
    info!("Saved settings to {}", path.display());
    Ok(())
}

/// Load settings from disk and validate them.
pub fn load_settings(path: impl AsRef<Path>) -> anyhow::Result<EditorSettings> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)
        .with_context(|| format!("read settings file: {}", path.display()))?;
    let settings: EditorSettings =
        serde_json::from_str(&data).context("parse settings json")?;
    settings
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    debug!("Loaded settings: {:?}", settings);
    Ok(settings)
}
