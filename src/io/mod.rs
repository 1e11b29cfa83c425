//! Input/output operations and error handling
//!
//! This module contains:
//! - Error types shared across the crate
//! - Configuration constants and defaults
//! - SVG serialization of rendered patterns
//! - Text persistence of settings plus cut grids
//! - The command-line interface

/// Command-line interface for pattern generation
pub mod cli;
/// Crate constants and runtime configuration defaults
pub mod configuration;
/// Error types for all knotwork operations
pub mod error;
/// Text persistence of settings and cut grids
pub mod pattern_file;
/// SVG serialization of rendered patterns
pub mod svg;
