use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::app::infrastructure::error::{AppError, Result};

/// Candidate text colors for a cloud. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(AppError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn single(color: Color) -> Self {
        Self { colors: vec![color] }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Append a color. Duplicates are allowed and weight the random draw.
    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    /// Remove the color at `index`. Refuses to remove the last one.
    pub fn remove(&mut self, index: usize) -> Result<Color> {
        if index >= self.colors.len() {
            return Err(AppError::ColorIndex(index));
        }
        if self.colors.len() == 1 {
            return Err(AppError::LastColor);
        }
        Ok(self.colors.remove(index))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::single(Color::BLACK)
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = AppError;

    fn try_from(colors: Vec<Color>) -> Result<Self> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_single_black() {
        let palette = Palette::default();
        assert_eq!(palette.colors(), &[Color::BLACK]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(Palette::new(Vec::new()), Err(AppError::EmptyPalette)));
    }

    #[test]
    fn test_push_and_remove() {
        let red = Color::rgb(255, 0, 0);
        let mut palette = Palette::default();
        palette.push(red);
        assert_eq!(palette.len(), 2);

        assert_eq!(palette.remove(0).unwrap(), Color::BLACK);
        assert_eq!(palette.colors(), &[red]);
    }

    #[test]
    fn test_refuses_removing_last_color() {
        let mut palette = Palette::default();
        assert!(matches!(palette.remove(0), Err(AppError::LastColor)));
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut palette = Palette::new(vec![Color::BLACK, Color::WHITE]).unwrap();
        assert!(matches!(palette.remove(5), Err(AppError::ColorIndex(5))));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn test_deserialize_rejects_empty_list() {
        assert!(serde_json::from_str::<Palette>("[]").is_err());
        let palette: Palette = serde_json::from_str(r##"["red", "#00ff00"]"##).unwrap();
        assert_eq!(palette.len(), 2);
    }
}
