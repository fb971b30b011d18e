pub mod cloud_window;
pub mod file_dialogs;
pub mod main_window;
pub mod theme;
