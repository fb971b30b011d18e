use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::file_filters::{get_svg_filter, get_text_files_filter};

fn run_chooser(kind: FileDialogType, title: &str, filter: &str, dir: Option<&str>) -> Option<String> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(filter);
    if let Some(dir) = dir {
        // A vanished directory just falls back to the platform default
        let _ = nfc.set_directory(&dir);
    }
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(dir: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseFile, "Select a text file", &get_text_files_filter(), dir)
}

pub fn native_export_dialog(dir: Option<&str>) -> Option<String> {
    run_chooser(FileDialogType::BrowseSaveFile, "Export SVG", &get_svg_filter(), dir)
}
