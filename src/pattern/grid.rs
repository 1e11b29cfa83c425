//! Cut states and the sparse cut grid
//!
//! The knotwork pattern is fully determined by a grid of cuts. A knot
//! of `rows × columns` cells (both even) has `rows + 1` cut rows of
//! `columns / 2 + 1` entries each. Cut rows follow a brick-offset
//! layout: odd rows use every entry while even rows carry one unused
//! trailing entry, kept only so both row kinds index symmetrically.

use ndarray::Array2;

use crate::io::error::{KnotError, Result};
use crate::pattern::nodes::{ControlNode, can_connect};

/// Whether a strand crossing is severed along a grid edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CutState {
    /// No cut, strands cross freely
    #[default]
    None,
    /// Cut along the horizontal edge
    Horizontal,
    /// Cut along the vertical edge
    Vertical,
}

impl CutState {
    /// Matrix index of the state: none 0, horizontal 1, vertical 2
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::None => 0,
            Self::Horizontal => 1,
            Self::Vertical => 2,
        }
    }

    /// Single-character form used by the pattern text format
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::None => '-',
            Self::Horizontal => 'H',
            Self::Vertical => 'V',
        }
    }

    /// Parse the single-character form, `None` for unknown characters
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '-' => Some(Self::None),
            'H' => Some(Self::Horizontal),
            'V' => Some(Self::Vertical),
            _ => None,
        }
    }
}

/// Row or column parity of a knot cell
///
/// Index 0 counts as odd: parity is `(index + 1) % 2`, the convention
/// the tile table is authored in. Parity decides which cuts are
/// relevant to a cell and which tile orientation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// `(index + 1) % 2 == 0`
    Even,
    /// `(index + 1) % 2 == 1`
    Odd,
}

impl Parity {
    /// Parity of a row or column index
    #[must_use]
    pub const fn of(index: usize) -> Self {
        if (index + 1) % 2 == 1 {
            Self::Odd
        } else {
            Self::Even
        }
    }

    /// Matrix index of the parity: even 0, odd 1
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Even => 0,
            Self::Odd => 1,
        }
    }
}

/// Whether strands terminate at the knot's edges or wrap back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderState {
    /// Loose strand ends at the fringes
    Open,
    /// Strands wrap at the boundary, no loose ends
    Closed,
}

/// The sparse 2D grid of cut states defining a knot's topology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutGrid {
    cells: Array2<CutState>,
}

impl CutGrid {
    /// Create an empty grid with every cell set to [`CutState::None`]
    #[must_use]
    pub fn new(cut_rows: usize, cut_columns: usize) -> Self {
        Self {
            cells: Array2::from_elem((cut_rows, cut_columns), CutState::None),
        }
    }

    /// Number of cut rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cut entries per row
    #[must_use]
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of usable entries in a cut row
    ///
    /// Odd rows use the full width; even rows have one unused trailing
    /// entry due to the brick offset.
    #[must_use]
    pub fn usable_columns(&self, row: usize) -> usize {
        if row % 2 == 1 {
            self.columns()
        } else {
            self.columns().saturating_sub(1)
        }
    }

    /// Cut state at a position, if in bounds
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<CutState> {
        self.cells.get((row, column)).copied()
    }

    /// Cut state at a position, treating out-of-bounds as no cut
    #[must_use]
    pub fn cut_at(&self, row: usize, column: usize) -> CutState {
        self.get(row, column).unwrap_or_default()
    }

    /// Assign a cut state at a position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, column: usize, state: CutState) {
        if let Some(cell) = self.cells.get_mut((row, column)) {
            *cell = state;
        }
    }

    /// Open or close the knot's border
    ///
    /// Closing sets the topmost and bottommost rows to horizontal cuts
    /// and the leftmost/rightmost entries of odd rows to vertical cuts;
    /// opening clears the same positions back to no cut.
    pub fn set_border(&mut self, state: BorderState) {
        let horizontal = match state {
            BorderState::Open => CutState::None,
            BorderState::Closed => CutState::Horizontal,
        };
        let last_row = self.rows().saturating_sub(1);
        for column in 0..self.columns().saturating_sub(1) {
            self.set(0, column, horizontal);
            self.set(last_row, column, horizontal);
        }

        let vertical = match state {
            BorderState::Open => CutState::None,
            BorderState::Closed => CutState::Vertical,
        };
        let last_column = self.columns().saturating_sub(1);
        for row in (1..self.rows()).step_by(2) {
            self.set(row, 0, vertical);
            self.set(row, last_column, vertical);
        }
    }

    /// Assign a cut state to every grid entry between two control nodes
    ///
    /// The nodes must satisfy [`can_connect`]. This is the pure
    /// primitive: it always assigns `state`. Toggle-on-repeat behavior
    /// is a caller policy layered on top (see
    /// [`KnotSession::toggle_cut`](crate::render::session::KnotSession::toggle_cut)).
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidCutSegment`] when the nodes cannot
    /// be connected; the grid is left unchanged.
    pub fn set_segment(
        &mut self,
        from: ControlNode,
        to: ControlNode,
        state: CutState,
    ) -> Result<()> {
        let (start, end) = ordered_segment(from, to)?;

        if start.row == end.row {
            // Odd rows are offset right by one cut entry.
            let offset = start.row % 2;
            for column in (start.column + offset)..(end.column + offset) {
                self.set(start.row, column, state);
            }
        } else {
            for row in ((start.row + 1)..end.row).step_by(2) {
                self.set(row, start.column, state);
            }
        }
        Ok(())
    }

    /// Cut state of the first grid entry a segment would assign
    ///
    /// Used by toggle policies to decide between setting and clearing.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidCutSegment`] when the nodes cannot
    /// be connected.
    pub fn segment_start_cut(&self, from: ControlNode, to: ControlNode) -> Result<CutState> {
        let (start, end) = ordered_segment(from, to)?;
        if start.row == end.row {
            Ok(self.cut_at(start.row, start.column + start.row % 2))
        } else {
            Ok(self.cut_at(start.row + 1, start.column))
        }
    }
}

/// Validate a segment and order its endpoints top-left first
fn ordered_segment(from: ControlNode, to: ControlNode) -> Result<(ControlNode, ControlNode)> {
    if !can_connect(from, to) {
        return Err(KnotError::InvalidCutSegment {
            from_row: from.row,
            from_column: from.column,
            to_row: to.row,
            to_column: to.column,
        });
    }
    if to.row < from.row || to.column < from.column {
        Ok((to, from))
    } else {
        Ok((from, to))
    }
}
