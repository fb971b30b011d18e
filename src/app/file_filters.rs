/// Filter for documents that can be turned into a cloud.
///
/// FLTK format: "Description\tPattern"; FLTK adds "All Files (*)" itself.
pub fn get_text_files_filter() -> String {
    "Text Files\t*.txt".to_string()
}

/// Filter for exported clouds
pub fn get_svg_filter() -> String {
    "SVG Images\t*.svg".to_string()
}
