//! Cut pattern model and generation
//!
//! This module contains everything that defines a knot's topology:
//! - The sparse grid of cut states and its mutation primitives
//! - Control-node addressing for the interactive editor
//! - The randomized symmetric pattern generator

/// Randomized symmetric cut pattern generation
pub mod generator;
/// Cut states and the sparse cut grid
pub mod grid;
/// Control-node addressing and connectivity rules
pub mod nodes;

pub use grid::{BorderState, CutGrid, CutState, Parity};
pub use nodes::ControlNode;
