//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models and services, independent of the UI:
//! - Workspace command handling

pub mod workspace;
