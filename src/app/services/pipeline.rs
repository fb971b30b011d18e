use std::path::Path;

use crate::app::domain::config::RenderConfig;
use crate::app::domain::image::CloudImage;
use crate::app::infrastructure::error::{AppError, Result};

use super::colors::ColorStrategy;
use super::layout::CloudRenderer;
use super::text::{load_text, word_frequencies};

/// Presents a finished cloud without modifying it.
pub trait CloudDisplay {
    fn show(&mut self, image: &CloudImage) -> Result<()>;
}

/// Parse the Max Words field: a positive integer, surrounding whitespace allowed.
pub fn parse_max_words(input: &str) -> Result<usize> {
    match input.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidMaxWords(input.to_string())),
    }
}

/// Tokenize, count and render `text`.
pub fn generate_from_text(
    text: &str,
    config: &RenderConfig,
    renderer: &dyn CloudRenderer,
    colors: &mut dyn ColorStrategy,
) -> Result<CloudImage> {
    let counts = word_frequencies(text);
    log::info!(
        "Counted {} tokens, {} distinct words",
        counts.total(),
        counts.len()
    );
    let image = renderer.render(&counts, config, colors)?;
    log::info!(
        "Rendered {} of {} words on a {}x{} canvas",
        image.words.len(),
        counts.len().min(config.max_words),
        image.width,
        image.height
    );
    Ok(image)
}

/// Full pipeline for one document: validate, load, tokenize, count, render.
pub fn generate_from_file(
    path: &Path,
    config: &RenderConfig,
    renderer: &dyn CloudRenderer,
    colors: &mut dyn ColorStrategy,
) -> Result<CloudImage> {
    config.validate()?;
    let text = load_text(path)?;
    log::info!("Loaded {} ({} bytes)", path.display(), text.len());
    generate_from_text(&text, config, renderer, colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::colors::CyclicColors;
    use crate::app::services::layout::{EstimatedMeasure, SpiralLayout};
    use std::fs;

    #[test]
    fn test_parse_max_words() {
        assert_eq!(parse_max_words("200").unwrap(), 200);
        assert_eq!(parse_max_words(" 15 ").unwrap(), 15);
        for bad in ["", "abc", "0", "-5", "1.5", "12abc"] {
            assert!(
                matches!(parse_max_words(bad), Err(AppError::InvalidMaxWords(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_generate_from_text() {
        let renderer = SpiralLayout::new(EstimatedMeasure);
        let image = generate_from_text(
            "one two two three three three",
            &RenderConfig::default(),
            &renderer,
            &mut CyclicColors::new(),
        )
        .unwrap();
        assert_eq!(image.words[0].text, "three");
        assert_eq!(image.words[0].count, 3);
    }

    #[test]
    fn test_punctuation_only_document_fails() {
        let renderer = SpiralLayout::new(EstimatedMeasure);
        let err = generate_from_text("?!... --", &RenderConfig::default(), &renderer, &mut CyclicColors::new())
            .unwrap_err();
        assert!(matches!(err, AppError::NoWords));
    }

    #[test]
    fn test_generate_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = SpiralLayout::new(EstimatedMeasure);
        let err = generate_from_file(
            &dir.path().join("missing.txt"),
            &RenderConfig::default(),
            &renderer,
            &mut CyclicColors::new(),
        )
        .unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_invalid_config_checked_before_reading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "words words").unwrap();
        let config = RenderConfig { max_words: 0, ..Default::default() };
        let renderer = SpiralLayout::new(EstimatedMeasure);
        let err = generate_from_file(&path, &config, &renderer, &mut CyclicColors::new()).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
