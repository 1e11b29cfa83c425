//! Celtic knotwork generation and editing with vector path output
//!
//! The pattern is defined by a sparse grid of cuts that open or close
//! strand paths. Each knot cell resolves, from its two neighboring cuts
//! and its row/column parity, to one of 36 tile variants derived from a
//! small set of base shapes by rotation and mirroring. The renderer
//! emits per-cell path geometry that a presentation layer serializes,
//! for example to SVG.

#![forbid(unsafe_code)]

/// Tile path geometry, transforms, and the tile selection matrix
pub mod geometry;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Cut grid model, control-node addressing, and pattern generation
pub mod pattern;
/// Knotwork rendering, settings, and the session API
pub mod render;

pub use io::error::{KnotError, Result};
pub use render::session::KnotSession;
