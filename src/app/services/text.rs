use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::app::domain::words::WordCounts;
use crate::app::infrastructure::error::Result;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid word regex"));

/// Read the whole document into memory.
pub fn load_text(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Split text into lowercase word tokens, in source order.
///
/// A word is a maximal run of Unicode letters, digits and underscores;
/// everything else is a delimiter and never emitted.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
}

/// Count token occurrences. Pure: every call starts from an empty mapping.
pub fn count_words<S: AsRef<str>>(tokens: &[S]) -> WordCounts {
    let mut counts = WordCounts::new();
    for token in tokens {
        counts.add(token.as_ref());
    }
    counts
}

/// Tokenize and count in one step.
pub fn word_frequencies(text: &str) -> WordCounts {
    count_words(&tokenize(text))
}
