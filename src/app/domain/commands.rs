use std::path::PathBuf;

use super::color::Color;
use super::image::CloudImage;

/// A discrete, toolkit-independent request against the workspace.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectFile(PathBuf),
    ClearFile,
    SetBackground(Color),
    AddTextColor(Color),
    RemoveTextColor(usize),
    /// `max_words` is the raw text of the Max Words field.
    Generate { max_words: String },
}

/// What applying a [`Command`] produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Updated,
    Rendered(CloudImage),
}
