use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Max Words must be a positive integer (got \"{0}\")")]
    InvalidMaxWords(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("At least one text color is required")]
    EmptyPalette,

    #[error("Cannot remove the last text color")]
    LastColor,

    #[error("No text color at position {0}")]
    ColorIndex(usize),

    #[error("No text file selected")]
    NoFileSelected,

    #[error("We need at least 1 word to plot a word cloud, got 0")]
    NoWords,

    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Viewer(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;
