use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Pack, PackType},
    input::{Input, IntInput},
    prelude::*,
    window::Window,
};

use crate::app::domain::color::Color;
use crate::app::domain::config::RenderConfig;
use crate::app::domain::messages::Message;
use super::theme::{label_color_for, to_fltk};

const ROW_HEIGHT: i32 = 30;
const SWATCH_SIZE: i32 = 24;

pub struct MainWidgets {
    pub wind: Window,
    pub file_input: Input,
    pub max_words_input: IntInput,
    pub background_swatch: Frame,
    pub text_swatches: Pack,
}

fn label(text: &str) -> Frame {
    Frame::default()
        .with_label(text)
        .with_align(Align::Right | Align::Inside)
}

pub fn build_main_window(config: &RenderConfig, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 760, 220, "Word Cloud Generator");
    wind.set_xclass("TextCloud");
    wind.size_range(600, 200, 1200, 800);

    let mut flex = Flex::new(0, 0, 760, 220, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(10);
    flex.set_pad(10);

    // File selection
    let mut file_row = Flex::default();
    file_row.set_type(FlexType::Row);
    let file_label = label("Select a text file:");
    file_row.fixed(&file_label, 130);
    let file_input = Input::default();
    let mut browse_btn = Button::default().with_label("Browse");
    browse_btn.emit(sender.clone(), Message::BrowseFile);
    file_row.fixed(&browse_btn, 80);
    file_row.end();
    flex.fixed(&file_row, ROW_HEIGHT);

    // Options
    let mut options_row = Flex::default();
    options_row.set_type(FlexType::Row);
    let max_label = label("Max Words:");
    options_row.fixed(&max_label, 80);
    let mut max_words_input = IntInput::default();
    max_words_input.set_value(&config.max_words.to_string());
    options_row.fixed(&max_words_input, 60);
    let bg_label = label("Background Color:");
    options_row.fixed(&bg_label, 130);
    let mut bg_btn = Button::default().with_label("Select Color");
    bg_btn.emit(sender.clone(), Message::PickBackground);
    options_row.fixed(&bg_btn, 100);
    let text_label = label("Text Colors:");
    options_row.fixed(&text_label, 90);
    let mut add_color_btn = Button::default().with_label("Add Color");
    add_color_btn.emit(sender.clone(), Message::AddTextColor);
    options_row.fixed(&add_color_btn, 90);
    Frame::default();
    options_row.end();
    flex.fixed(&options_row, ROW_HEIGHT);

    // Current colors
    let mut colors_row = Flex::default();
    colors_row.set_type(FlexType::Row);
    let mut background_swatch = Frame::default().with_label("Background");
    background_swatch.set_frame(FrameType::FlatBox);
    colors_row.fixed(&background_swatch, 100);
    let mut text_swatches = Pack::default();
    text_swatches.set_type(PackType::Horizontal);
    text_swatches.set_spacing(4);
    text_swatches.end();
    colors_row.end();
    flex.fixed(&colors_row, SWATCH_SIZE);

    // Actions
    let mut actions_row = Flex::default();
    actions_row.set_type(FlexType::Row);
    Frame::default();
    let mut generate_btn = Button::default().with_label("Generate Word Cloud");
    generate_btn.emit(sender.clone(), Message::Generate);
    actions_row.fixed(&generate_btn, 170);
    let mut export_btn = Button::default().with_label("Export SVG...");
    export_btn.emit(sender.clone(), Message::ExportSvg);
    actions_row.fixed(&export_btn, 110);
    let mut viewer_btn = Button::default().with_label("Open in Viewer");
    viewer_btn.emit(sender.clone(), Message::OpenInViewer);
    actions_row.fixed(&viewer_btn, 120);
    Frame::default();
    actions_row.end();
    flex.fixed(&actions_row, ROW_HEIGHT);

    Frame::default();
    flex.end();
    wind.resizable(&flex);
    wind.end();

    wind.emit(sender.clone(), Message::WindowClose);

    let mut widgets = MainWidgets {
        wind,
        file_input,
        max_words_input,
        background_swatch,
        text_swatches,
    };
    widgets.show_background(config.background);
    widgets.show_text_colors(config.palette.colors(), sender);
    widgets
}

impl MainWidgets {
    pub fn show_background(&mut self, color: Color) {
        self.background_swatch.set_color(to_fltk(color));
        self.background_swatch.set_label_color(label_color_for(color));
        self.background_swatch.set_tooltip(&color.to_string());
        self.background_swatch.redraw();
    }

    /// Rebuild the swatch row; clicking a swatch asks to remove that color.
    pub fn show_text_colors(&mut self, colors: &[Color], sender: &Sender<Message>) {
        self.text_swatches.clear();
        self.text_swatches.begin();
        for (index, color) in colors.iter().enumerate() {
            let mut swatch = Button::default().with_size(SWATCH_SIZE, SWATCH_SIZE);
            swatch.set_frame(FrameType::FlatBox);
            swatch.set_color(to_fltk(*color));
            swatch.set_tooltip(&format!("{} (click to remove)", color));
            swatch.emit(sender.clone(), Message::RemoveTextColor(index));
        }
        self.text_swatches.end();
        self.wind.redraw();
    }

    pub fn file_path_text(&self) -> String {
        self.file_input.value().trim().to_string()
    }

    pub fn set_file_path_text(&mut self, path: &str) {
        self.file_input.set_value(path);
    }

    pub fn max_words_text(&self) -> String {
        self.max_words_input.value()
    }
}
