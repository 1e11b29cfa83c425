//! The tile selection matrix
//!
//! The state of each knot cell is fully determined by its two closest
//! cuts and by the parity of the row and column it sits on, giving
//! 3 × 3 × 2 × 2 = 36 combinations. Each combination maps to one tile
//! variant, most of them rotations or mirrorings of a base tile. The
//! mapping is hand-authored design knowledge; it is not derivable.

use crate::geometry::path::Rotation;
use crate::geometry::tiles::{BaseTile, TileVariant};
use crate::pattern::grid::{CutState, Parity};

/// The composite lookup key for one knot cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileKey {
    /// The cut below the cell (always considered first)
    pub first: CutState,
    /// The cut above the cell
    pub second: CutState,
    /// Parity of the cell's row
    pub row: Parity,
    /// Parity of the cell's column
    pub col: Parity,
}

impl TileKey {
    /// Pack the key into a flat table index in `0..36`
    #[must_use]
    pub const fn index(self) -> usize {
        ((self.first.index() * 3 + self.second.index()) * 2 + self.row.index()) * 2
            + self.col.index()
    }

    /// Every valid key, in table order
    pub fn all() -> impl Iterator<Item = Self> {
        const CUTS: [CutState; 3] = [CutState::None, CutState::Horizontal, CutState::Vertical];
        const PARITIES: [Parity; 2] = [Parity::Even, Parity::Odd];
        CUTS.into_iter().flat_map(move |first| {
            CUTS.into_iter().flat_map(move |second| {
                PARITIES.into_iter().flat_map(move |row| {
                    PARITIES
                        .into_iter()
                        .map(move |col| Self {
                            first,
                            second,
                            row,
                            col,
                        })
                })
            })
        })
    }
}

/// The 36-entry dispatch table from cell state to tile variant
#[derive(Debug, Clone)]
pub struct TileMatrix {
    tiles: Vec<TileVariant>,
    fallback: TileVariant,
}

impl TileMatrix {
    /// Build the full table by explicit enumeration
    ///
    /// Entries start as the diagnostic tile and are then assigned one
    /// by one; a combination left unassigned would render as a red
    /// crossed-out square instead of disappearing silently.
    #[must_use]
    pub fn new() -> Self {
        use BaseTile::{Corner, CurvedCrossOver, CurvedCrossUnder, StraightCross, StraightRun};
        use CutState::{Horizontal, None, Vertical};
        use Parity::{Even, Odd};
        use Rotation::{Half, Quarter, ThreeQuarter};

        let mut matrix = Self {
            tiles: vec![TileVariant::of(BaseTile::Diagnostic); 36],
            fallback: TileVariant::of(BaseTile::Diagnostic),
        };

        let cross = || TileVariant::of(StraightCross);
        matrix.assign(None, None, Odd, Odd, cross());
        matrix.assign(None, None, Odd, Even, cross().rotated(Quarter));
        matrix.assign(None, None, Even, Even, cross().rotated(Half));
        matrix.assign(None, None, Even, Odd, cross().rotated(ThreeQuarter));

        let corner = || TileVariant::of(Corner);
        matrix.assign(Horizontal, Vertical, Even, Even, corner());
        matrix.assign(Horizontal, Vertical, Even, Odd, corner().rotated(Quarter));
        matrix.assign(Horizontal, Vertical, Odd, Odd, corner());
        matrix.assign(Horizontal, Vertical, Odd, Even, corner().rotated(Quarter));

        matrix.assign(Vertical, Horizontal, Even, Even, corner().rotated(Half));
        matrix.assign(Vertical, Horizontal, Odd, Odd, corner().rotated(Half));
        matrix.assign(Vertical, Horizontal, Even, Odd, corner().rotated(ThreeQuarter));
        matrix.assign(Vertical, Horizontal, Odd, Even, corner().rotated(ThreeQuarter));

        let run = || TileVariant::of(StraightRun);
        matrix.assign(Horizontal, Horizontal, Even, Even, run());
        matrix.assign(Horizontal, Horizontal, Odd, Odd, run());
        matrix.assign(Horizontal, Horizontal, Even, Odd, run());
        matrix.assign(Horizontal, Horizontal, Odd, Even, run());

        let vertical_run = || TileVariant::of(StraightRun).rotated(Quarter);
        matrix.assign(Vertical, Vertical, Even, Even, vertical_run());
        matrix.assign(Vertical, Vertical, Odd, Odd, vertical_run());
        matrix.assign(Vertical, Vertical, Even, Odd, vertical_run());
        matrix.assign(Vertical, Vertical, Odd, Even, vertical_run());

        let over = || TileVariant::of(CurvedCrossOver);
        let under = || TileVariant::of(CurvedCrossUnder);
        matrix.assign(Vertical, None, Even, Even, over());
        matrix.assign(Vertical, None, Odd, Odd, under());
        matrix.assign(Vertical, None, Even, Odd, under().mirrored());
        matrix.assign(Vertical, None, Odd, Even, over().mirrored());

        matrix.assign(None, Vertical, Even, Even, under().rotated(Half));
        matrix.assign(None, Vertical, Even, Odd, over().mirrored().rotated(Half));
        matrix.assign(None, Vertical, Odd, Odd, over().rotated(Half));
        matrix.assign(None, Vertical, Odd, Even, under().mirrored().rotated(Half));

        matrix.assign(Horizontal, None, Even, Even, over().mirrored().rotated(Quarter));
        matrix.assign(Horizontal, None, Even, Odd, under().rotated(ThreeQuarter));
        matrix.assign(Horizontal, None, Odd, Odd, under().mirrored().rotated(Quarter));
        matrix.assign(Horizontal, None, Odd, Even, over().rotated(ThreeQuarter));

        matrix.assign(None, Horizontal, Even, Even, under().mirrored().rotated(ThreeQuarter));
        matrix.assign(None, Horizontal, Even, Odd, over().rotated(Quarter));
        matrix.assign(None, Horizontal, Odd, Odd, over().mirrored().rotated(ThreeQuarter));
        matrix.assign(None, Horizontal, Odd, Even, under().rotated(Quarter));

        matrix
    }

    fn assign(&mut self, first: CutState, second: CutState, row: Parity, col: Parity, tile: TileVariant) {
        let key = TileKey {
            first,
            second,
            row,
            col,
        };
        if let Some(slot) = self.tiles.get_mut(key.index()) {
            *slot = tile;
        }
    }

    /// Resolve the tile variant for a cell state
    ///
    /// An out-of-range index cannot occur for keys built from the
    /// public enums; if it ever did, the diagnostic tile is returned
    /// rather than panicking, in debug and release alike.
    #[must_use]
    pub fn variant(&self, key: TileKey) -> &TileVariant {
        self.tiles.get(key.index()).unwrap_or(&self.fallback)
    }
}

impl Default for TileMatrix {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_are_distinct_and_in_range() {
        let mut seen = [false; 36];
        for key in TileKey::all() {
            let index = key.index();
            assert!(index < 36);
            if let Some(slot) = seen.get_mut(index) {
                assert!(!*slot, "duplicate index {index}");
                *slot = true;
            }
        }
        assert!(seen.iter().all(|&v| v));
    }

    #[test]
    fn every_combination_is_assigned() {
        let matrix = TileMatrix::new();
        for key in TileKey::all() {
            assert!(
                !matrix.variant(key).is_diagnostic(),
                "unassigned combination {key:?}"
            );
        }
    }

    #[test]
    fn uncut_cells_resolve_to_straight_crossings() {
        let matrix = TileMatrix::new();
        let key = TileKey {
            first: CutState::None,
            second: CutState::None,
            row: Parity::Odd,
            col: Parity::Odd,
        };
        assert_eq!(*matrix.variant(key), TileVariant::of(BaseTile::StraightCross));
    }
}
