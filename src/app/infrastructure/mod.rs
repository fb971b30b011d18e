//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Error types
//! - Preferences file location
//! - External image viewer

pub mod error;
pub mod paths;
pub mod viewer;
