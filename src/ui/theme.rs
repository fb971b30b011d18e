use fltk::enums::{Color as FlColor, Font};

use crate::app::domain::color::Color;

/// Font used both for measuring words during layout and for painting them.
pub const CLOUD_FONT: Font = Font::Helvetica;

pub fn to_fltk(color: Color) -> FlColor {
    FlColor::from_rgb(color.r, color.g, color.b)
}

/// Black or white, whichever reads better on top of `background`.
pub fn label_color_for(background: Color) -> FlColor {
    if is_light(background) {
        FlColor::Black
    } else {
        FlColor::White
    }
}

fn is_light(color: Color) -> bool {
    // ITU-R BT.601 luma
    let luma = 299 * color.r as u32 + 587 * color.g as u32 + 114 * color.b as u32;
    luma >= 128_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_light() {
        assert!(is_light(Color::WHITE));
        assert!(is_light(Color::rgb(255, 255, 0)));
        assert!(!is_light(Color::BLACK));
        assert!(!is_light(Color::rgb(0, 0, 128)));
    }
}
