//! Crate constants and runtime configuration defaults

// Structural limits
/// Smallest allowed knot dimension, in cells
pub const MIN_GRID_DIMENSION: usize = 4;
/// Largest allowed knot dimension, in cells
pub const MAX_GRID_DIMENSION: usize = 100;

// Cosmetic limits
/// Smallest allowed cell size, in pixels
pub const MIN_CELL_SIZE: f64 = 12.0;
/// Smallest allowed strand or stroke width, in pixels
pub const MIN_COSMETIC_SIZE: f64 = 1.0;
// Safety margin so strands never overflow their cell
/// Strand and stroke widths may not exceed `cell_size` minus this
pub const COSMETIC_MARGIN: f64 = 2.0;

// Default values for configurable parameters
/// Default knot height, in cells
pub const DEFAULT_KNOT_ROWS: usize = 12;
/// Default knot width, in cells
pub const DEFAULT_KNOT_COLUMNS: usize = 12;
/// Default cell size, in pixels
pub const DEFAULT_CELL_SIZE: f64 = 53.0;
/// Default strand width, in pixels
pub const DEFAULT_STRING_SIZE: f64 = 22.0;
/// Default outline stroke width, in pixels
pub const DEFAULT_STROKE_WIDTH: f64 = 2.0;
/// Default strand fill color
pub const DEFAULT_STRING_COLOR: &str = "#FF9A39";
/// Default outline stroke color
pub const DEFAULT_STROKE_COLOR: &str = "#000000";
/// Default background color
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

// Generator settings
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Fraction of cut grid positions receiving a random cut
pub const DEFAULT_CUT_DENSITY: f64 = 0.3;
/// Default weight for both symmetry modes
pub const DEFAULT_SYMMETRY_WEIGHT: u32 = 50;
