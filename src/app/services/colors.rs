use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::app::domain::color::Color;
use crate::app::domain::palette::Palette;
use crate::app::infrastructure::error::{AppError, Result};

/// Supplies the text color of each placed word.
pub trait ColorStrategy {
    fn pick(&mut self, palette: &Palette, word: &str, font_size: u32) -> Color;
}

/// Uniform random choice with replacement for every word.
pub struct RandomColors<R: Rng = StdRng> {
    rng: R,
}

impl RandomColors<StdRng> {
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible draws for tests and previews.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomColors<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorStrategy for RandomColors<R> {
    fn pick(&mut self, palette: &Palette, _word: &str, _font_size: u32) -> Color {
        let colors = palette.colors();
        colors[self.rng.random_range(0..colors.len())]
    }
}

/// Walks the palette in order, wrapping around.
#[derive(Debug, Default)]
pub struct CyclicColors {
    next: usize,
}

impl CyclicColors {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorStrategy for CyclicColors {
    fn pick(&mut self, palette: &Palette, _word: &str, _font_size: u32) -> Color {
        let colors = palette.colors();
        let color = colors[self.next % colors.len()];
        self.next = (self.next + 1) % colors.len();
        color
    }
}

/// Pick one color uniformly from a raw candidate list.
pub fn select_color<R: Rng>(candidates: &[Color], rng: &mut R) -> Result<Color> {
    if candidates.is_empty() {
        return Err(AppError::EmptyPalette);
    }
    Ok(candidates[rng.random_range(0..candidates.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb_palette() -> Palette {
        Palette::new(vec![
            "red".parse().unwrap(),
            "blue".parse().unwrap(),
            "green".parse().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_random_always_picks_member() {
        let palette = rgb_palette();
        let mut strategy = RandomColors::seeded(7);
        for i in 0..500 {
            let color = strategy.pick(&palette, "word", i);
            assert!(palette.colors().contains(&color));
        }
    }

    #[test]
    fn test_random_eventually_uses_every_color() {
        let palette = rgb_palette();
        let mut strategy = RandomColors::seeded(42);
        let picked: Vec<Color> = (0..300).map(|_| strategy.pick(&palette, "w", 10)).collect();
        for color in palette.colors() {
            assert!(picked.contains(color), "{} never chosen", color);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let palette = rgb_palette();
        let mut a = RandomColors::seeded(3);
        let mut b = RandomColors::seeded(3);
        for _ in 0..50 {
            assert_eq!(a.pick(&palette, "w", 10), b.pick(&palette, "w", 10));
        }
    }

    #[test]
    fn test_single_color_palette() {
        let palette = Palette::default();
        let mut strategy = RandomColors::seeded(1);
        assert_eq!(strategy.pick(&palette, "w", 10), Color::BLACK);
    }

    #[test]
    fn test_cyclic_wraps() {
        let palette = rgb_palette();
        let mut strategy = CyclicColors::new();
        let picked: Vec<Color> = (0..4).map(|_| strategy.pick(&palette, "w", 10)).collect();
        let colors = palette.colors();
        assert_eq!(picked, vec![colors[0], colors[1], colors[2], colors[0]]);
    }

    #[test]
    fn test_select_color_guards_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(select_color(&[], &mut rng), Err(AppError::EmptyPalette)));

        let candidates = rgb_palette().colors().to_vec();
        for _ in 0..100 {
            let color = select_color(&candidates, &mut rng).unwrap();
            assert!(candidates.contains(&color));
        }
    }
}
