use fltk::{
    app::Sender,
    dialog::{self, ColorMode},
    prelude::*,
};
use std::path::Path;

use super::controllers::workspace::Workspace;
use super::domain::{CloudImage, Color, Command, Message, Outcome, RenderConfig};
use super::infrastructure::error::AppError;
use super::infrastructure::viewer::ExternalViewer;
use super::services::colors::RandomColors;
use super::services::export::write_svg;
use super::services::layout::SpiralLayout;
use super::services::pipeline::CloudDisplay;
use crate::ui::cloud_window::{CloudWindows, FltkMeasure};
use crate::ui::file_dialogs::{native_export_dialog, native_open_dialog};
use crate::ui::main_window::MainWidgets;

pub struct AppState {
    pub workspace: Workspace,
    pub widgets: MainWidgets,
    pub sender: Sender<Message>,
    pub cloud_windows: CloudWindows,
    /// Most recent successful render, for export and the external viewer
    pub last_image: Option<CloudImage>,
    /// Last directory used in a file open/save dialog.
    pub last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sender: Sender<Message>, config: RenderConfig) -> Self {
        let workspace = Workspace::new(
            config,
            Box::new(SpiralLayout::new(FltkMeasure)),
            Box::new(RandomColors::from_os_rng()),
        );

        Self {
            workspace,
            widgets,
            sender,
            cloud_windows: CloudWindows::new(),
            last_image: None,
            last_open_directory: None,
        }
    }

    /// Handle one message from the channel. Returns true when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::BrowseFile => self.browse_file(),
            Message::PickBackground => self.pick_background(),
            Message::AddTextColor => self.add_text_color(),
            Message::RemoveTextColor(index) => self.remove_text_color(index),
            Message::Generate => self.generate(),
            Message::ExportSvg => self.export_svg(),
            Message::OpenInViewer => self.open_in_viewer(),
            Message::WindowClose => {
                self.cloud_windows.close_all();
                self.widgets.wind.hide();
                return true;
            }
        }
        false
    }

    /// Apply a command, reporting any failure in a single alert.
    fn apply(&mut self, command: Command) -> Option<Outcome> {
        match self.workspace.apply(command) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                report_error(&e);
                None
            }
        }
    }

    fn remember_directory(&mut self, path: &str) {
        if let Some(parent) = Path::new(path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- Input ---

    pub fn browse_file(&mut self) {
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.remember_directory(&path);
            self.widgets.set_file_path_text(&path);
            self.apply(Command::SelectFile(path.into()));
        }
    }

    // --- Colors ---

    pub fn pick_background(&mut self) {
        if let Some(rgb) = dialog::color_chooser("Background Color", ColorMode::Byte) {
            let color = Color::from(rgb);
            if self.apply(Command::SetBackground(color)).is_some() {
                self.widgets.show_background(color);
            }
        }
    }

    pub fn add_text_color(&mut self) {
        if let Some(rgb) = dialog::color_chooser("Text Color", ColorMode::Byte) {
            if self.apply(Command::AddTextColor(Color::from(rgb))).is_some() {
                self.refresh_text_colors();
            }
        }
    }

    pub fn remove_text_color(&mut self, index: usize) {
        if self.apply(Command::RemoveTextColor(index)).is_some() {
            self.refresh_text_colors();
        }
    }

    fn refresh_text_colors(&mut self) {
        let colors = self.workspace.config().palette.colors().to_vec();
        self.widgets.show_text_colors(&colors, &self.sender);
    }

    // --- Output ---

    pub fn generate(&mut self) {
        // The file field is the selection, whether typed, browsed or cleared
        let typed = self.widgets.file_path_text();
        if let Some(command) = self.workspace.selection_for(&typed) {
            self.apply(command);
        }

        let max_words = self.widgets.max_words_text();
        let Some(Outcome::Rendered(image)) = self.apply(Command::Generate { max_words }) else {
            return;
        };

        if let Err(e) = self.cloud_windows.show(&image) {
            report_error(&e);
        }
        self.last_image = Some(image);
    }

    pub fn export_svg(&mut self) {
        let Some(image) = self.last_image.as_ref() else {
            dialog::message_default("Generate a word cloud first");
            return;
        };
        if let Some(path) = native_export_dialog(self.last_open_directory.as_deref()) {
            if let Err(e) = write_svg(Path::new(&path), image) {
                report_error(&e);
                return;
            }
            self.remember_directory(&path);
        }
    }

    pub fn open_in_viewer(&mut self) {
        let Some(image) = self.last_image.as_ref() else {
            dialog::message_default("Generate a word cloud first");
            return;
        };
        if let Err(e) = ExternalViewer.show(image) {
            report_error(&e);
        }
    }
}

fn report_error(err: &AppError) {
    log::error!("{}", err);
    match err {
        AppError::InvalidMaxWords(_) | AppError::LastColor => dialog::alert_default(&err.to_string()),
        _ => dialog::alert_default(&format!("An error occurred: {}", err)),
    }
}
