//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Tokenizing and counting text
//! - Color selection strategies
//! - Cloud layout
//! - The generate pipeline
//! - SVG export

pub mod colors;
pub mod export;
pub mod layout;
pub mod pipeline;
pub mod text;
