//! Tile geometry and selection
//!
//! This module contains the vector geometry of the knotwork:
//! - Path commands, paint roles, and pure coordinate transforms
//! - Base tile constructors and the rotate/mirror combinators
//! - The 36-entry tile selection matrix

/// The tile selection matrix keyed by cuts and parity
pub mod matrix;
/// Path commands, points, and coordinate transforms
pub mod path;
/// Base tile constructors and transform combinators
pub mod tiles;

pub use matrix::{TileKey, TileMatrix};
pub use path::{PaintRole, Path, PathCommand, Point};
