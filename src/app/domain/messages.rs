/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    // Input
    BrowseFile,

    // Colors
    PickBackground,
    AddTextColor,
    RemoveTextColor(usize),

    // Output
    Generate,
    ExportSvg,
    OpenInViewer,

    WindowClose,
}
