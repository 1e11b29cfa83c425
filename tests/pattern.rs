//! Validates cut grid editing, border handling, and symmetric generation

use knotweave::KnotSession;
use knotweave::pattern::grid::{BorderState, CutGrid, CutState};
use knotweave::pattern::nodes::ControlNode;

#[test]
fn test_new_session_has_an_uncut_pattern() {
    let session = KnotSession::new();
    let grid = session.grid();
    assert_eq!(grid.rows(), 13);
    assert_eq!(grid.columns(), 7);
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            assert_eq!(grid.cut_at(row, column), CutState::None);
        }
    }
}

#[test]
fn test_closing_and_opening_the_border_round_trips() {
    let mut session = KnotSession::new();
    let node_a = ControlNode { row: 3, column: 2 };
    let node_b = ControlNode { row: 3, column: 4 };
    session.apply_cut(node_a, node_b).unwrap();
    let with_cut = session.grid().clone();

    session.set_border_state(BorderState::Closed);
    assert_eq!(session.grid().cut_at(0, 0), CutState::Horizontal);
    assert_eq!(session.grid().cut_at(12, 5), CutState::Horizontal);
    assert_eq!(session.grid().cut_at(1, 0), CutState::Vertical);
    assert_eq!(session.grid().cut_at(11, 6), CutState::Vertical);

    session.set_border_state(BorderState::Open);
    assert_eq!(session.grid(), &with_cut);
}

#[test]
fn test_connectivity_rules() {
    let node = |row, column| ControlNode { row, column };

    // Same row always connects.
    assert!(KnotSession::can_connect(node(2, 0), node(2, 3)));
    // Same column needs matching row parity.
    assert!(KnotSession::can_connect(node(1, 2), node(5, 2)));
    assert!(KnotSession::can_connect(node(0, 1), node(4, 1)));
    assert!(!KnotSession::can_connect(node(1, 2), node(2, 2)));
    // Different row and column never connects.
    assert!(!KnotSession::can_connect(node(1, 1), node(3, 2)));
    // A node does not connect to itself.
    assert!(!KnotSession::can_connect(node(2, 2), node(2, 2)));
}

#[test]
fn test_cut_segments_are_order_independent() {
    let mut forward = KnotSession::new();
    let mut backward = KnotSession::new();
    let node_a = ControlNode { row: 4, column: 1 };
    let node_b = ControlNode { row: 4, column: 4 };

    forward.apply_cut(node_a, node_b).unwrap();
    backward.apply_cut(node_b, node_a).unwrap();
    assert_eq!(forward.grid(), backward.grid());
}

#[test]
fn test_invalid_cut_leaves_the_pattern_untouched() {
    let mut session = KnotSession::new();
    session.randomize_pattern(23);
    let before = session.grid().clone();

    let node_a = ControlNode { row: 1, column: 1 };
    let node_b = ControlNode { row: 2, column: 3 };
    assert!(session.apply_cut(node_a, node_b).is_err());
    assert_eq!(session.grid(), &before);
}

#[test]
fn test_generated_patterns_respect_border_constraints() {
    for seed in 0..8 {
        let mut session = KnotSession::new();
        session.randomize_pattern(seed);
        let grid = session.grid();
        let last_row = grid.rows() - 1;

        for column in 0..grid.columns() {
            assert_ne!(grid.cut_at(0, column), CutState::Vertical);
            assert_ne!(grid.cut_at(last_row, column), CutState::Vertical);
        }
        for row in 1..last_row {
            let width = grid.usable_columns(row);
            assert_ne!(grid.cut_at(row, 0), CutState::Horizontal);
            assert_ne!(grid.cut_at(row, width - 1), CutState::Horizontal);
        }
    }
}

#[test]
fn test_reset_restores_the_empty_pattern() {
    let mut session = KnotSession::new();
    session.randomize_pattern(3);
    session.reset_pattern();
    let empty = CutGrid::new(13, 7);
    assert_eq!(session.grid(), &empty);
}

#[test]
fn test_closest_node_matches_node_centers() {
    let session = KnotSession::new();
    let cell = session.settings().cell_size();

    // Dead center of node (2, 1) on an even row.
    let node = session.closest_control_node(2.0 * cell, 2.0 * cell, None);
    assert_eq!(node, Some(ControlNode { row: 2, column: 1 }));

    // Odd rows are offset right by one cell.
    let node = session.closest_control_node(3.0 * cell, 3.0 * cell, None);
    assert_eq!(node, Some(ControlNode { row: 3, column: 1 }));

    // Far outside the work area.
    assert_eq!(session.closest_control_node(-500.0, -500.0, None), None);
}
