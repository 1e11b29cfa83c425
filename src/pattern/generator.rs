//! Randomized symmetric cut pattern generation
//!
//! Produces aesthetically plausible knots by placing random cuts and
//! mirroring each placement, either across the vertical center line
//! only (bilateral) or across both center lines (quadrilateral). The
//! result is biased toward symmetry, not validated beyond staying in
//! bounds and respecting border constraints.

use rand::Rng;
use rand::rngs::StdRng;

use crate::io::configuration::{DEFAULT_CUT_DENSITY, DEFAULT_SYMMETRY_WEIGHT};
use crate::pattern::grid::{CutGrid, CutState};

/// States valid at interior positions
const ANY: [CutState; 3] = [CutState::None, CutState::Vertical, CutState::Horizontal];
/// States valid on the top and bottom border rows
const HORIZONTAL_ONLY: [CutState; 2] = [CutState::None, CutState::Horizontal];
/// States valid on the left and right border columns
const VERTICAL_ONLY: [CutState; 2] = [CutState::None, CutState::Vertical];

/// Tuning knobs for the pattern generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of cut placements; defaults to a fixed density of the
    /// grid area when `None`
    pub total_cuts: Option<usize>,
    /// Relative weight of left-right mirrored placements
    pub bilateral_weight: u32,
    /// Relative weight of four-quadrant mirrored placements
    pub quadrilateral_weight: u32,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            total_cuts: None,
            bilateral_weight: DEFAULT_SYMMETRY_WEIGHT,
            quadrilateral_weight: DEFAULT_SYMMETRY_WEIGHT,
        }
    }
}

/// Generate a randomized symmetric cut grid
///
/// Each iteration picks a random position, draws a cut state from the
/// subset valid there (border rows only allow horizontal cuts, border
/// columns only vertical ones), assigns it, and mirrors the assignment.
/// The bilateral-vs-quadrilateral choice uses a strict threshold so a
/// zero weight never selects its branch: weight 100/0 guarantees exact
/// left-right symmetry, 0/100 exact four-quadrant symmetry.
#[must_use]
pub fn generate(
    cut_rows: usize,
    cut_columns: usize,
    options: &GeneratorOptions,
    rng: &mut StdRng,
) -> CutGrid {
    let mut grid = CutGrid::new(cut_rows, cut_columns);
    if cut_rows == 0 || cut_columns < 2 {
        return grid;
    }

    let total_cuts = options
        .total_cuts
        .unwrap_or_else(|| (cut_rows as f64 * cut_columns as f64 * DEFAULT_CUT_DENSITY) as usize);
    let bilateral = options.bilateral_weight;
    let total_weight = bilateral + options.quadrilateral_weight;

    for _ in 0..total_cuts {
        let row = rng.random_range(0..cut_rows);
        let max_columns = grid.usable_columns(row);
        let column = rng.random_range(0..max_columns);

        let possible: &[CutState] = if row == 0 || row == cut_rows - 1 {
            &HORIZONTAL_ONLY
        } else if column == 0 || column == max_columns - 1 {
            &VERTICAL_ONLY
        } else {
            &ANY
        };
        let state = possible
            .get(rng.random_range(0..possible.len()))
            .copied()
            .unwrap_or_default();

        grid.set(row, column, state);

        let mirrored_column = max_columns - column - 1;
        if total_weight == 0 || rng.random::<f64>() * f64::from(total_weight) < f64::from(bilateral)
        {
            // Mirror onto the other side of the pattern.
            grid.set(row, mirrored_column, state);
        } else {
            // Mirror onto the other three quadrants of the pattern.
            grid.set(row, mirrored_column, state);
            grid.set(cut_rows - row - 1, column, state);
            grid.set(cut_rows - row - 1, mirrored_column, state);
        }
    }

    grid
}
