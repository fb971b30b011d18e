#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use fltk::{app, prelude::*};

use text_cloud::app::domain::{Message, RenderConfig};
use text_cloud::app::state::AppState;
use text_cloud::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let app = app::App::default().with_scheme(app::Scheme::Gtk);
    let (sender, receiver) = app::channel::<Message>();

    let config = RenderConfig::default();
    let mut widgets = build_main_window(&config, &sender);
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, config);
    log::info!("Word Cloud Generator ready");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                break;
            }
        }
    }
}
