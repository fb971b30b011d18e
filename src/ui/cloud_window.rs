use fltk::{draw, frame::Frame, prelude::*, window::Window};

use crate::app::domain::image::CloudImage;
use crate::app::infrastructure::error::Result;
use crate::app::services::layout::TextMeasure;
use crate::app::services::pipeline::CloudDisplay;
use super::theme::{CLOUD_FONT, to_fltk};

/// Measures words with the same font the cloud window paints them in.
/// Only valid once FLTK has a display connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct FltkMeasure;

impl TextMeasure for FltkMeasure {
    fn measure(&self, text: &str, font_size: u32) -> (u32, u32) {
        draw::set_font(CLOUD_FONT, font_size as i32);
        let (w, h) = draw::measure(text, false);
        (w.max(0) as u32, h.max(0) as u32)
    }
}

/// Opens one window per rendered cloud, painted exactly as laid out.
#[derive(Default)]
pub struct CloudWindows {
    windows: Vec<Window>,
}

impl CloudWindows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close_all(&mut self) {
        for mut wind in self.windows.drain(..) {
            wind.hide();
        }
    }
}

impl CloudDisplay for CloudWindows {
    fn show(&mut self, image: &CloudImage) -> Result<()> {
        // Drop windows the user already closed
        self.windows.retain(|w| w.shown());

        let (w, h) = (image.width as i32, image.height as i32);
        let mut wind = Window::default()
            .with_size(w, h)
            .with_label("Word Cloud")
            .center_screen();
        let mut canvas = Frame::new(0, 0, w, h, None);

        let image = image.clone();
        canvas.draw(move |f| {
            draw::draw_rect_fill(f.x(), f.y(), f.w(), f.h(), to_fltk(image.background));
            for word in &image.words {
                draw::set_font(CLOUD_FONT, word.font_size as i32);
                draw::set_draw_color(to_fltk(word.color));
                let baseline = f.y() + word.y + word.height as i32 - draw::descent();
                draw::draw_text(&word.text, f.x() + word.x, baseline);
            }
        });

        wind.end();
        wind.show();
        self.windows.push(wind);
        Ok(())
    }
}
