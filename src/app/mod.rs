//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Color, Palette, RenderConfig, CloudImage, Messages)
//! - `services/` - Business operations (tokenize/count, colors, layout, pipeline, export)
//! - `controllers/` - Orchestration (Workspace command handling)
//! - `infrastructure/` - External integrations (error, paths, external viewer)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::workspace::Workspace;
pub use domain::{
    CloudImage, Color, Command, Message, Outcome, Palette, PlacedWord, RenderConfig, WordCounts,
};
pub use infrastructure::error::{AppError, Result};
pub use services::colors::{ColorStrategy, CyclicColors, RandomColors, select_color};
pub use services::layout::{CloudRenderer, EstimatedMeasure, SpiralLayout, TextMeasure};
pub use services::pipeline::{CloudDisplay, generate_from_file, generate_from_text, parse_max_words};
pub use services::text::{count_words, load_text, tokenize, word_frequencies};
