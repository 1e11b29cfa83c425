//! Knotwork rendering and the session API
//!
//! This module contains:
//! - Validated cosmetic and structural settings
//! - The per-cell renderer producing vector path geometry
//! - The session object tying settings, grid, and matrix together

/// Per-cell knotwork rendering
pub mod knotwork;
/// The session object exposing the external interface
pub mod session;
/// Validated knot settings
pub mod settings;

pub use knotwork::CellRender;
pub use session::KnotSession;
pub use settings::KnotSettings;
