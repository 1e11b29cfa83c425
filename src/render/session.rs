//! The session object exposing the external interface
//!
//! A [`KnotSession`] owns the settings, the cut grid, and the tile
//! matrix, and keeps them consistent: resizing the knot rebuilds the
//! grid, cut edits are validated against the node connectivity rules,
//! and rendering always reflects the current state.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geometry::matrix::TileMatrix;
use crate::io::error::{Result, invalid_parameter};
use crate::pattern::generator::{self, GeneratorOptions};
use crate::pattern::grid::{BorderState, CutGrid, CutState};
use crate::pattern::nodes::{self, ControlNode};
use crate::render::knotwork::{self, CellRender};
use crate::render::settings::KnotSettings;

/// An editable knotwork pattern with its rendering state
#[derive(Debug, Clone)]
pub struct KnotSession {
    settings: KnotSettings,
    grid: CutGrid,
    matrix: TileMatrix,
}

impl Default for KnotSession {
    fn default() -> Self {
        Self::new()
    }
}

impl KnotSession {
    /// Create a session with default settings and an empty pattern
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(KnotSettings::default())
    }

    /// Create a session around existing settings, with an empty pattern
    #[must_use]
    pub fn with_settings(settings: KnotSettings) -> Self {
        let grid = CutGrid::new(settings.cut_rows(), settings.cut_columns());
        Self {
            settings,
            grid,
            matrix: TileMatrix::new(),
        }
    }

    /// Reassemble a session from settings and a matching cut grid
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidParameter`](crate::KnotError) when
    /// the grid dimensions do not match the settings.
    pub fn from_parts(settings: KnotSettings, grid: CutGrid) -> Result<Self> {
        if grid.rows() != settings.cut_rows() || grid.columns() != settings.cut_columns() {
            return Err(invalid_parameter(
                "grid",
                &format!("{}x{}", grid.rows(), grid.columns()),
                &format!(
                    "expected a {}x{} cut grid for a {}x{} knot",
                    settings.cut_rows(),
                    settings.cut_columns(),
                    settings.rows(),
                    settings.columns()
                ),
            ));
        }
        Ok(Self {
            settings,
            grid,
            matrix: TileMatrix::new(),
        })
    }

    /// Current settings
    #[must_use]
    pub const fn settings(&self) -> &KnotSettings {
        &self.settings
    }

    /// Current cut grid
    #[must_use]
    pub const fn grid(&self) -> &CutGrid {
        &self.grid
    }

    /// Resize the knot, discarding the current pattern
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidDimension`](crate::KnotError) when a
    /// normalized dimension is out of range; the session is unchanged.
    pub fn set_grid_size(&mut self, rows: usize, columns: usize) -> Result<()> {
        self.settings.set_grid_size(rows, columns)?;
        self.grid = CutGrid::new(self.settings.cut_rows(), self.settings.cut_columns());
        Ok(())
    }

    /// Set the cell size, clamped; see [`KnotSettings::set_cell_size`]
    pub fn set_cell_size(&mut self, size: f64) {
        self.settings.set_cell_size(size);
    }

    /// Set the strand width, clamped
    pub fn set_string_size(&mut self, size: f64) {
        self.settings.set_string_size(size);
    }

    /// Set the stroke width, clamped
    pub fn set_stroke_width(&mut self, width: f64) {
        self.settings.set_stroke_width(width);
    }

    /// Set the strand fill color
    pub fn set_string_color(&mut self, color: impl Into<String>) {
        self.settings.set_string_color(color);
    }

    /// Set the outline stroke color
    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.settings.set_stroke_color(color);
    }

    /// Set the background color
    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.settings.set_background_color(color);
    }

    /// Clear every cut, restoring the fully woven pattern
    pub fn reset_pattern(&mut self) {
        self.grid = CutGrid::new(self.settings.cut_rows(), self.settings.cut_columns());
    }

    /// Replace the pattern with a seeded random symmetric one
    pub fn randomize_pattern(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize_pattern_with(&GeneratorOptions::default(), &mut rng);
    }

    /// Replace the pattern using explicit generator options and rng
    pub fn randomize_pattern_with(&mut self, options: &GeneratorOptions, rng: &mut StdRng) {
        self.grid = generator::generate(
            self.settings.cut_rows(),
            self.settings.cut_columns(),
            options,
            rng,
        );
    }

    /// Open or close the knot's border
    pub fn set_border_state(&mut self, state: BorderState) {
        self.grid.set_border(state);
    }

    /// Render the current pattern into per-cell vector geometry
    #[must_use]
    pub fn render(&self) -> Vec<CellRender> {
        knotwork::render(&self.grid, &self.settings, &self.matrix)
    }

    /// Find the control node nearest to a pixel position, if any
    #[must_use]
    pub fn closest_control_node(
        &self,
        x: f64,
        y: f64,
        tolerance: Option<f64>,
    ) -> Option<ControlNode> {
        nodes::closest_node(
            self.settings.cell_size(),
            self.settings.rows(),
            self.settings.columns(),
            x,
            y,
            tolerance,
        )
    }

    /// Whether a cut can run between two control nodes
    #[must_use]
    pub const fn can_connect(from: ControlNode, to: ControlNode) -> bool {
        nodes::can_connect(from, to)
    }

    /// Cut along the segment between two control nodes
    ///
    /// The cut orientation follows the segment: nodes on the same row
    /// produce horizontal cuts, nodes on the same column vertical ones.
    /// Returns the applied state.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidCutSegment`](crate::KnotError) when
    /// the nodes cannot be connected; the pattern is unchanged.
    pub fn apply_cut(&mut self, from: ControlNode, to: ControlNode) -> Result<CutState> {
        let state = segment_orientation(from, to);
        self.grid.set_segment(from, to, state)?;
        Ok(state)
    }

    /// Assign an explicit cut state along the segment between two nodes
    ///
    /// Unlike [`Self::apply_cut`] the state is not derived from the
    /// segment's direction, so this can also clear cuts.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidCutSegment`](crate::KnotError) when
    /// the nodes cannot be connected; the pattern is unchanged.
    pub fn set_cut_segment(
        &mut self,
        from: ControlNode,
        to: ControlNode,
        state: CutState,
    ) -> Result<()> {
        self.grid.set_segment(from, to, state)
    }

    /// Cut along a segment, or clear it when already cut that way
    ///
    /// When the first grid entry the segment covers already holds the
    /// segment's orientation, the whole segment is cleared instead.
    /// Returns the state actually written.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidCutSegment`](crate::KnotError) when
    /// the nodes cannot be connected; the pattern is unchanged.
    pub fn toggle_cut(&mut self, from: ControlNode, to: ControlNode) -> Result<CutState> {
        let orientation = segment_orientation(from, to);
        let state = if self.grid.segment_start_cut(from, to)? == orientation {
            CutState::None
        } else {
            orientation
        };
        self.grid.set_segment(from, to, state)?;
        Ok(state)
    }
}

/// Cut orientation implied by a segment's direction
const fn segment_orientation(from: ControlNode, to: ControlNode) -> CutState {
    if from.row == to.row {
        CutState::Horizontal
    } else {
        CutState::Vertical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resizing_discards_the_pattern() {
        let mut session = KnotSession::new();
        session.randomize_pattern(3);
        session.set_grid_size(6, 6).unwrap();

        assert_eq!(session.grid().rows(), 7);
        assert_eq!(session.grid().columns(), 4);
        let empty = CutGrid::new(7, 4);
        assert_eq!(session.grid(), &empty);
    }

    #[test]
    fn failed_resize_keeps_the_pattern() {
        let mut session = KnotSession::new();
        session.randomize_pattern(3);
        let before = session.grid().clone();
        assert!(session.set_grid_size(200, 6).is_err());
        assert_eq!(session.grid(), &before);
    }

    #[test]
    fn from_parts_rejects_mismatched_grid() {
        let settings = KnotSettings::default();
        let grid = CutGrid::new(3, 3);
        assert!(KnotSession::from_parts(settings, grid).is_err());
    }

    #[test]
    fn apply_cut_follows_segment_orientation() {
        let mut session = KnotSession::new();
        let from = ControlNode { row: 2, column: 1 };
        let to = ControlNode { row: 2, column: 3 };
        let state = session.apply_cut(from, to).unwrap();
        assert_eq!(state, CutState::Horizontal);
        assert_eq!(session.grid().cut_at(2, 1), CutState::Horizontal);
    }

    #[test]
    fn toggle_clears_a_repeated_cut() {
        let mut session = KnotSession::new();
        let from = ControlNode { row: 1, column: 1 };
        let to = ControlNode { row: 5, column: 1 };

        let first = session.toggle_cut(from, to).unwrap();
        assert_eq!(first, CutState::Vertical);
        assert_eq!(session.grid().cut_at(2, 1), CutState::Vertical);

        let second = session.toggle_cut(from, to).unwrap();
        assert_eq!(second, CutState::None);
        assert_eq!(session.grid().cut_at(2, 1), CutState::None);
    }

    #[test]
    fn explicit_segment_state_can_clear_cuts() {
        let mut session = KnotSession::new();
        let from = ControlNode { row: 2, column: 1 };
        let to = ControlNode { row: 2, column: 4 };

        session.apply_cut(from, to).unwrap();
        session.set_cut_segment(from, to, CutState::None).unwrap();
        assert_eq!(session.grid().cut_at(2, 1), CutState::None);
        assert_eq!(session.grid().cut_at(2, 2), CutState::None);
    }

    #[test]
    fn randomize_is_reproducible() {
        let mut a = KnotSession::new();
        let mut b = KnotSession::new();
        a.randomize_pattern(99);
        b.randomize_pattern(99);
        assert_eq!(a.grid(), b.grid());
    }
}
