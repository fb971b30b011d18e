use std::path::{Path, PathBuf};

use crate::app::domain::commands::{Command, Outcome};
use crate::app::domain::config::RenderConfig;
use crate::app::domain::image::CloudImage;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::colors::ColorStrategy;
use crate::app::services::layout::CloudRenderer;
use crate::app::services::pipeline::{generate_from_file, parse_max_words};

/// Application state behind the window: the chosen document and the render
/// configuration, changed only through [`Command`]s.
pub struct Workspace {
    file_path: Option<PathBuf>,
    config: RenderConfig,
    renderer: Box<dyn CloudRenderer>,
    colors: Box<dyn ColorStrategy>,
}

impl Workspace {
    pub fn new(
        config: RenderConfig,
        renderer: Box<dyn CloudRenderer>,
        colors: Box<dyn ColorStrategy>,
    ) -> Self {
        Self {
            file_path: None,
            config,
            renderer,
            colors,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Command that makes the selection match the text of the file field:
    /// `None` when it already does, `ClearFile` when the field is empty.
    pub fn selection_for(&self, typed: &str) -> Option<Command> {
        match (typed.is_empty(), self.file_path()) {
            (true, None) => None,
            (true, Some(_)) => Some(Command::ClearFile),
            (false, Some(current)) if current == Path::new(typed) => None,
            (false, _) => Some(Command::SelectFile(typed.into())),
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::SelectFile(path) => {
                self.file_path = Some(path);
            }
            Command::ClearFile => {
                self.file_path = None;
            }
            Command::SetBackground(color) => {
                self.config.background = color;
            }
            Command::AddTextColor(color) => {
                self.config.palette.push(color);
            }
            Command::RemoveTextColor(index) => {
                self.config.palette.remove(index)?;
            }
            Command::Generate { max_words } => {
                return self.generate(&max_words).map(Outcome::Rendered);
            }
        }
        Ok(Outcome::Updated)
    }

    fn generate(&mut self, max_words: &str) -> Result<CloudImage> {
        let max_words = parse_max_words(max_words)?;
        self.config.max_words = max_words;

        let path = self.file_path.as_deref().ok_or(AppError::NoFileSelected)?;
        generate_from_file(path, &self.config, self.renderer.as_ref(), self.colors.as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::color::Color;
    use crate::app::services::colors::CyclicColors;
    use crate::app::services::layout::{EstimatedMeasure, SpiralLayout};
    use std::fs;

    fn workspace() -> Workspace {
        Workspace::new(
            RenderConfig::default(),
            Box::new(SpiralLayout::new(EstimatedMeasure)),
            Box::new(CyclicColors::new()),
        )
    }

    fn generate(max_words: &str) -> Command {
        Command::Generate {
            max_words: max_words.to_string(),
        }
    }

    #[test]
    fn test_color_commands() {
        let mut ws = workspace();
        let red = Color::rgb(255, 0, 0);

        assert_eq!(ws.apply(Command::SetBackground(Color::BLACK)).unwrap(), Outcome::Updated);
        assert_eq!(ws.config().background, Color::BLACK);

        ws.apply(Command::AddTextColor(red)).unwrap();
        assert_eq!(ws.config().palette.colors(), &[Color::BLACK, red]);

        ws.apply(Command::RemoveTextColor(0)).unwrap();
        assert_eq!(ws.config().palette.colors(), &[red]);
    }

    #[test]
    fn test_removing_last_color_is_refused() {
        let mut ws = workspace();
        let err = ws.apply(Command::RemoveTextColor(0)).unwrap_err();
        assert!(matches!(err, AppError::LastColor));
        assert_eq!(ws.config().palette.len(), 1);
    }

    #[test]
    fn test_invalid_max_words_leaves_config_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "alpha beta").unwrap();

        let mut ws = workspace();
        ws.apply(Command::SelectFile(path)).unwrap();
        for bad in ["abc", "0", "-5"] {
            let err = ws.apply(generate(bad)).unwrap_err();
            assert!(matches!(err, AppError::InvalidMaxWords(_)));
            assert_eq!(ws.config().max_words, 200);
        }
    }

    #[test]
    fn test_generate_without_file() {
        let mut ws = workspace();
        let err = ws.apply(generate("200")).unwrap_err();
        assert!(matches!(err, AppError::NoFileSelected));
    }

    #[test]
    fn test_generate_renders_and_accepts_max_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "gamma delta gamma epsilon").unwrap();

        let mut ws = workspace();
        ws.apply(Command::SelectFile(path.clone())).unwrap();
        assert_eq!(ws.file_path(), Some(path.as_path()));

        let Outcome::Rendered(image) = ws.apply(generate("2")).unwrap() else {
            panic!("expected a rendered cloud");
        };
        assert_eq!(ws.config().max_words, 2);
        assert_eq!(image.words.len(), 2);
        assert_eq!(image.words[0].text, "gamma");
    }

    #[test]
    fn test_selection_follows_file_field() {
        let mut ws = workspace();
        assert_eq!(ws.selection_for(""), None);
        assert_eq!(
            ws.selection_for("notes.txt"),
            Some(Command::SelectFile("notes.txt".into()))
        );

        ws.apply(Command::SelectFile("notes.txt".into())).unwrap();
        assert_eq!(ws.selection_for("notes.txt"), None);
        assert_eq!(
            ws.selection_for("other.txt"),
            Some(Command::SelectFile("other.txt".into()))
        );
        assert_eq!(ws.selection_for(""), Some(Command::ClearFile));
    }

    #[test]
    fn test_cleared_field_drops_browsed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "alpha beta").unwrap();

        let mut ws = workspace();
        ws.apply(Command::SelectFile(path)).unwrap();

        let clear = ws.selection_for("").unwrap();
        ws.apply(clear).unwrap();
        assert_eq!(ws.file_path(), None);
        assert!(matches!(ws.apply(generate("200")), Err(AppError::NoFileSelected)));
    }

    #[test]
    fn test_failed_generate_keeps_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let mut ws = workspace();
        ws.apply(Command::SelectFile(path.clone())).unwrap();
        let before = ws.config().clone();

        assert!(matches!(ws.apply(generate("200")), Err(AppError::Io(_))));
        assert_eq!(ws.config(), &before);
        assert_eq!(ws.file_path(), Some(path.as_path()));
    }
}
