//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Colors, palettes and the render configuration
//! - Word counts and rendered clouds
//! - Commands and UI messages

pub mod color;
pub mod commands;
pub mod config;
pub mod image;
pub mod messages;
pub mod palette;
pub mod words;

pub use color::Color;
pub use commands::{Command, Outcome};
pub use config::RenderConfig;
pub use image::{CloudImage, PlacedWord};
pub use messages::Message;
pub use palette::Palette;
pub use words::WordCounts;
