//! Word cloud layout.
//!
//! Words are ranked by frequency, capped at `max_words`, and sized relative to
//! the previous word: `size = (rs * freq / last_freq + (1 - rs)) * last_size`.
//! Each word is then placed on an Archimedean spiral starting at the canvas
//! center, at the first spot where it overlaps nothing already placed. A word
//! that does not fit gets the largest smaller size on the `font_step` grid for
//! which the spiral finds a spot (found by bisection). When the spiral finds no
//! spot at any size down to `min_font_size`, the layout is finished. The spiral
//! samples positions, so small gaps may remain on a finished canvas.

use crate::app::domain::config::RenderConfig;
use crate::app::domain::image::{CloudImage, PlacedWord};
use crate::app::domain::words::WordCounts;
use crate::app::infrastructure::error::{AppError, Result};

use super::colors::ColorStrategy;

/// Distance between spiral rings, in pixels per radian
const SPIRAL_PITCH: f32 = 3.0;
/// Approximate distance between successive candidate positions, in pixels
const SPIRAL_STEP: f32 = 4.0;

/// Turns a frequency mapping into a laid-out cloud.
pub trait CloudRenderer {
    fn render(
        &self,
        counts: &WordCounts,
        config: &RenderConfig,
        colors: &mut dyn ColorStrategy,
    ) -> Result<CloudImage>;
}

/// Pixel extent of a word drawn at a given font size.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_size: u32) -> (u32, u32);
}

/// Font-free estimate: average glyph is 0.6em wide, lines are 1.2em tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMeasure;

impl TextMeasure for EstimatedMeasure {
    fn measure(&self, text: &str, font_size: u32) -> (u32, u32) {
        let chars = text.chars().count() as f32;
        let size = font_size as f32;
        (
            (chars * size * 6.0 / 10.0).ceil() as u32,
            (size * 12.0 / 10.0).ceil() as u32,
        )
    }
}

pub struct SpiralLayout<M: TextMeasure> {
    measure: M,
}

struct Spot {
    font_size: u32,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl<M: TextMeasure> SpiralLayout<M> {
    pub fn new(measure: M) -> Self {
        Self { measure }
    }

    fn try_size(
        &self,
        word: &str,
        font_size: u32,
        placed: &[PlacedWord],
        config: &RenderConfig,
    ) -> Option<Spot> {
        let (width, height) = self.measure.measure(word, font_size);
        self.find_position(width, height, placed, config)
            .map(|(x, y)| Spot { font_size, x, y, width, height })
    }

    /// Place `word` at `start` size, or at the largest smaller size on the
    /// `font_step` grid that still fits.
    fn place(
        &self,
        word: &str,
        start: u32,
        placed: &[PlacedWord],
        config: &RenderConfig,
    ) -> Option<Spot> {
        if start < config.min_font_size {
            return None;
        }
        if let Some(spot) = self.try_size(word, start, placed, config) {
            return Some(spot);
        }

        // Candidate k shrinks the font by k steps; smaller k means a bigger word
        let step = config.font_step;
        let (mut lo, mut hi) = (1, (start - config.min_font_size) / step);
        let mut best = None;
        while lo <= hi {
            let mid = lo + (hi - lo) / 2;
            match self.try_size(word, start - mid * step, placed, config) {
                Some(spot) => {
                    best = Some(spot);
                    hi = mid - 1;
                }
                None => lo = mid + 1,
            }
        }
        best
    }

    /// Top-left corner for a `width` x `height` box, if any free spot exists.
    fn find_position(
        &self,
        width: u32,
        height: u32,
        placed: &[PlacedWord],
        config: &RenderConfig,
    ) -> Option<(i32, i32)> {
        if width > config.width || height > config.height {
            return None;
        }

        let margin = config.margin as i32;
        let (canvas_w, canvas_h) = (config.width as f32, config.height as f32);
        let origin_x = (canvas_w - width as f32) / 2.0;
        let origin_y = (canvas_h - height as f32) / 2.0;
        // Squash the spiral into an ellipse matching the canvas aspect ratio
        let aspect = canvas_h / canvas_w;
        let max_radius = (canvas_w / 2.0) * std::f32::consts::SQRT_2;

        let mut theta = 0.0f32;
        loop {
            let radius = SPIRAL_PITCH * theta;
            if radius > max_radius {
                return None;
            }

            let x = (origin_x + radius * theta.cos()).round() as i32;
            let y = (origin_y + radius * theta.sin() * aspect).round() as i32;

            let in_bounds = x >= 0
                && y >= 0
                && x + width as i32 <= config.width as i32
                && y + height as i32 <= config.height as i32;

            if in_bounds {
                let collides = placed.iter().any(|other| {
                    x - margin < other.right()
                        && other.x < x + width as i32 + margin
                        && y - margin < other.bottom()
                        && other.y < y + height as i32 + margin
                });
                if !collides {
                    return Some((x, y));
                }
            }

            theta += SPIRAL_STEP / radius.max(SPIRAL_STEP);
        }
    }
}

impl<M: TextMeasure> CloudRenderer for SpiralLayout<M> {
    fn render(
        &self,
        counts: &WordCounts,
        config: &RenderConfig,
        colors: &mut dyn ColorStrategy,
    ) -> Result<CloudImage> {
        config.validate()?;
        if counts.is_empty() {
            return Err(AppError::NoWords);
        }

        let ranked = counts.ranked();
        let max_count = ranked[0].1 as f32;
        let rs = config.relative_scaling;

        let mut image = CloudImage::new(config.width, config.height, config.background);
        let mut font_size = config.effective_max_font_size();
        let mut last_freq = 1.0f32;

        for (index, (word, count)) in ranked.into_iter().take(config.max_words).enumerate() {
            let freq = count as f32 / max_count;
            if index > 0 {
                font_size = ((rs * freq / last_freq + (1.0 - rs)) * font_size as f32).round() as u32;
            }

            let Some(spot) = self.place(word, font_size, &image.words, config) else {
                log::debug!(
                    "Layout full after {} words; dropping \"{}\" and below",
                    image.words.len(),
                    word
                );
                break;
            };

            font_size = spot.font_size;
            let color = colors.pick(&config.palette, word, font_size);
            image.words.push(PlacedWord {
                text: word.to_string(),
                count,
                font_size,
                x: spot.x,
                y: spot.y,
                width: spot.width,
                height: spot.height,
                color,
            });
            last_freq = freq;
        }

        if image.words.is_empty() {
            return Err(AppError::InvalidConfig(format!(
                "a {}x{} canvas cannot fit any word at font size {} or above",
                config.width, config.height, config.min_font_size
            )));
        }

        Ok(image)
    }
}
