//! Per-cell knotwork rendering
//!
//! Rendering walks the knot in row-major order. For each cell the two
//! governing cuts are read from the brick-offset cut grid, the tile
//! matrix is consulted with the cut pair and cell parities, and the
//! resulting tile geometry is emitted in cell-local coordinates next
//! to the cell's pixel origin.

use crate::geometry::matrix::{TileKey, TileMatrix};
use crate::geometry::path::{PaintRole, Path, Point};
use crate::pattern::grid::{CutGrid, CutState, Parity};
use crate::render::settings::KnotSettings;

/// Geometry rendered for one knot cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellRender {
    /// Pixel position of the cell's top-left corner
    pub origin: Point,
    /// Tile paths in cell-local coordinates
    pub paths: Vec<Path>,
}

impl CellRender {
    /// Whether this cell rendered the diagnostic placeholder tile
    #[must_use]
    pub fn is_diagnostic(&self) -> bool {
        self.paths
            .iter()
            .any(|path| path.role == PaintRole::Diagnostic)
    }
}

/// Look up the two cuts governing the cell at knot position `(x, y)`
///
/// The cut grid is brick-offset relative to knot cells: each cell
/// reads one entry from the cut row below it and one from the cut row
/// above it, with the entry column depending on the cell parities.
fn neighbor_cuts(grid: &CutGrid, x: usize, y: usize) -> (CutState, CutState) {
    if Parity::of(x) == Parity::Odd {
        (grid.cut_at(y + 1, x / 2), grid.cut_at(y, x / 2))
    } else if Parity::of(y) == Parity::Odd {
        (
            grid.cut_at(y + 1, (x + 1) / 2),
            grid.cut_at(y, x.saturating_sub(1) / 2),
        )
    } else {
        (
            grid.cut_at(y + 1, x.saturating_sub(1) / 2),
            grid.cut_at(y, (x + 1) / 2),
        )
    }
}

/// Render every cell of a knot into vector path geometry
///
/// Cells are emitted in row-major order, top row first. The returned
/// vector holds exactly `rows × columns` entries.
#[must_use]
pub fn render(grid: &CutGrid, settings: &KnotSettings, matrix: &TileMatrix) -> Vec<CellRender> {
    let style = settings.tile_style();
    let cell = settings.cell_size();
    let mut cells = Vec::with_capacity(settings.rows() * settings.columns());

    for y in 0..settings.rows() {
        for x in 0..settings.columns() {
            let (first, second) = neighbor_cuts(grid, x, y);
            let key = TileKey {
                first,
                second,
                row: Parity::of(y),
                col: Parity::of(x),
            };
            let variant = matrix.variant(key);
            cells.push(CellRender {
                origin: Point::new(x as f64 * cell, y as f64 * cell),
                paths: variant.paths(&style),
            });
        }
    }

    cells
}
