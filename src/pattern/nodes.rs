//! Control-node addressing and connectivity rules
//!
//! Control nodes are the grid intersections the editor uses as cut
//! handles. Rows follow the same brick offset as the cut grid: odd
//! rows are shifted right by one cell, so a node's column does not
//! line up vertically with the same column on a row of the other
//! parity.

use crate::geometry::path::Point;

/// A grid intersection used as a cut-placement handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlNode {
    /// Cut row the node sits on
    pub row: usize,
    /// Brick-offset column within the row
    pub column: usize,
}

/// Pixel center of a control node
///
/// Shared by the editor and the renderer so hit testing and drawing
/// stay consistent: `x = column · 2 · cell (+ cell on odd rows)`,
/// `y = row · cell`.
#[must_use]
pub fn node_center(cell_size: f64, node: ControlNode) -> Point {
    let mut x = node.column as f64 * cell_size * 2.0;
    if node.row % 2 == 1 {
        x += cell_size;
    }
    Point::new(x, node.row as f64 * cell_size)
}

/// Whether a cut can run between two control nodes
///
/// Cutting requires distinct nodes on the same row, or on the same
/// column with matching row parity: the brick offset means a column on
/// an odd row is not vertically aligned with that column on an even
/// row.
#[must_use]
pub const fn can_connect(a: ControlNode, b: ControlNode) -> bool {
    if a.row == b.row && a.column == b.column {
        return false;
    }
    let same_row = a.row == b.row;
    let same_column = a.column == b.column && a.row % 2 == b.row % 2;
    same_row || same_column
}

/// Find the control node closest to a pixel position
///
/// Returns `None` when no node lies within `tolerance` (cell size by
/// default) of the position, or when the nearest candidate falls
/// outside the work area. `rows` and `columns` are the knot cell
/// counts, not cut grid dimensions.
#[must_use]
pub fn closest_node(
    cell_size: f64,
    rows: usize,
    columns: usize,
    x: f64,
    y: f64,
    tolerance: Option<f64>,
) -> Option<ControlNode> {
    let tolerance = tolerance.unwrap_or(cell_size);

    let row = (y / cell_size).round();
    if row < 0.0 || row > rows as f64 {
        return None;
    }
    let row = row as usize;

    let mut adjusted_x = x;
    if row % 2 == 1 {
        adjusted_x -= cell_size;
    }
    let column = (adjusted_x / cell_size / 2.0).round();
    if column < 0.0 {
        return None;
    }
    let column = column as usize;

    let last_column = columns / 2;
    if column > last_column || (row % 2 == 1 && column >= last_column) {
        return None;
    }

    let node = ControlNode { row, column };
    let center = node_center(cell_size, node);
    let is_close = (x - center.x).abs() <= tolerance && (y - center.y).abs() <= tolerance;
    is_close.then_some(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_row_nodes_connect() {
        let a = ControlNode { row: 2, column: 1 };
        let b = ControlNode { row: 2, column: 3 };
        assert!(can_connect(a, b));
    }

    #[test]
    fn same_column_requires_matching_parity() {
        let a = ControlNode { row: 1, column: 2 };
        let b = ControlNode { row: 3, column: 2 };
        assert!(can_connect(a, b));

        let c = ControlNode { row: 2, column: 2 };
        assert!(!can_connect(a, c));
    }

    #[test]
    fn identical_nodes_do_not_connect() {
        let a = ControlNode { row: 4, column: 1 };
        assert!(!can_connect(a, a));
    }

    #[test]
    fn odd_rows_are_offset_by_one_cell() {
        let even = node_center(50.0, ControlNode { row: 2, column: 1 });
        let odd = node_center(50.0, ControlNode { row: 3, column: 1 });
        assert!((even.x - 100.0).abs() < f64::EPSILON);
        assert!((odd.x - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn closest_node_snaps_within_tolerance() {
        let node = closest_node(50.0, 6, 6, 103.0, 98.0, None);
        assert_eq!(node, Some(ControlNode { row: 2, column: 1 }));
    }

    #[test]
    fn closest_node_rejects_far_positions() {
        let node = closest_node(50.0, 6, 6, 103.0, 98.0, Some(2.0));
        assert_eq!(node, None);
    }

    #[test]
    fn odd_row_last_column_is_invalid() {
        // Node (1, 3) does not exist on a 6-column knot: odd rows stop
        // one short of columns / 2.
        let node = closest_node(50.0, 6, 6, 350.0, 50.0, None);
        assert_eq!(node, None);
    }
}
