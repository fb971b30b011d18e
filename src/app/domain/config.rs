use serde::{Deserialize, Serialize};

use super::color::Color;
use super::palette::Palette;
use crate::app::infrastructure::error::{AppError, Result};

/// Largest accepted canvas side, in pixels.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Everything a renderer needs besides the word frequencies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// Cap on distinct words placed in the cloud
    #[serde(default = "default_max_words")]
    pub max_words: usize,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default)]
    pub palette: Palette,

    /// Layout stops once a word would need a smaller font than this
    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    /// Font size of the most frequent word; `None` derives it from the height
    #[serde(default)]
    pub max_font_size: Option<u32>,

    /// 0.0 sizes words by rank only, 1.0 strictly proportional to frequency
    #[serde(default = "default_relative_scaling")]
    pub relative_scaling: f32,

    #[serde(default = "default_font_step")]
    pub font_step: u32,

    /// Padding in pixels kept around every placed word
    #[serde(default = "default_margin")]
    pub margin: u32,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    400
}

fn default_max_words() -> usize {
    200
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_min_font_size() -> u32 {
    4
}

fn default_relative_scaling() -> f32 {
    0.5
}

fn default_font_step() -> u32 {
    1
}

fn default_margin() -> u32 {
    2
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            max_words: default_max_words(),
            background: default_background(),
            palette: Palette::default(),
            min_font_size: default_min_font_size(),
            max_font_size: None,
            relative_scaling: default_relative_scaling(),
            font_step: default_font_step(),
            margin: default_margin(),
        }
    }
}

impl RenderConfig {
    /// Font size used for the most frequent word.
    pub fn effective_max_font_size(&self) -> u32 {
        self.max_font_size
            .unwrap_or(self.height / 3)
            .max(self.min_font_size)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(AppError::InvalidConfig(format!(
                "canvas must be non-empty (got {}x{})",
                self.width, self.height
            )));
        }
        if self.width > MAX_CANVAS_SIDE || self.height > MAX_CANVAS_SIDE {
            return Err(AppError::InvalidConfig(format!(
                "canvas is limited to {}x{} (got {}x{})",
                MAX_CANVAS_SIDE, MAX_CANVAS_SIDE, self.width, self.height
            )));
        }
        if self.max_words == 0 {
            return Err(AppError::InvalidConfig("max_words must be at least 1".to_string()));
        }
        if self.min_font_size == 0 {
            return Err(AppError::InvalidConfig("min_font_size must be at least 1".to_string()));
        }
        if self.font_step == 0 {
            return Err(AppError::InvalidConfig("font_step must be at least 1".to_string()));
        }
        if let Some(max) = self.max_font_size {
            if max < self.min_font_size {
                return Err(AppError::InvalidConfig(format!(
                    "max_font_size {} is below min_font_size {}",
                    max, self.min_font_size
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.relative_scaling) {
            return Err(AppError::InvalidConfig(format!(
                "relative_scaling must be within 0..=1 (got {})",
                self.relative_scaling
            )));
        }
        Ok(())
    }
}
