//! Validates tile selection coverage and transform behavior of the renderer

use knotweave::KnotSession;
use knotweave::geometry::matrix::{TileKey, TileMatrix};
use knotweave::geometry::path::{PaintRole, Point, Rotation};
use knotweave::geometry::tiles::{BaseTile, TileStyle, TileVariant};

const TOLERANCE: f64 = 1e-9;

fn style() -> TileStyle {
    TileStyle {
        cell_size: 53.0,
        string_size: 22.0,
    }
}

#[test]
fn test_every_tile_key_resolves_to_a_real_tile() {
    let matrix = TileMatrix::new();
    let mut seen = 0;
    for key in TileKey::all() {
        assert!(
            !matrix.variant(key).is_diagnostic(),
            "unassigned matrix entry for {key:?}"
        );
        seen += 1;
    }
    assert_eq!(seen, 36);
}

#[test]
fn test_four_quarter_rotations_are_identity() {
    let style = style();
    let original = TileVariant::of(BaseTile::Corner).paths(&style);
    let rotated = TileVariant::of(BaseTile::Corner)
        .rotated(Rotation::Quarter)
        .rotated(Rotation::Quarter)
        .rotated(Rotation::Quarter)
        .rotated(Rotation::Quarter)
        .paths(&style);

    assert_eq!(original.len(), rotated.len());
    for (a, b) in original.iter().zip(rotated.iter()) {
        assert!(a.approx_eq(b, TOLERANCE));
    }
}

#[test]
fn test_double_mirror_is_identity() {
    let style = style();
    let original = TileVariant::of(BaseTile::CurvedCrossOver).paths(&style);
    let mirrored = TileVariant::of(BaseTile::CurvedCrossOver)
        .mirrored()
        .mirrored()
        .paths(&style);

    assert_eq!(original.len(), mirrored.len());
    for (a, b) in original.iter().zip(mirrored.iter()) {
        assert!(a.approx_eq(b, TOLERANCE));
    }
}

#[test]
fn test_empty_pattern_renders_full_weave() {
    let mut session = KnotSession::new();
    session.set_grid_size(4, 4).unwrap();
    session.set_cell_size(50.0);

    let cells = session.render();
    assert_eq!(cells.len(), 16);
    assert_eq!(cells.first().map(|c| c.origin), Some(Point::new(0.0, 0.0)));
    assert_eq!(cells.get(1).map(|c| c.origin), Some(Point::new(50.0, 0.0)));
    assert_eq!(cells.get(4).map(|c| c.origin), Some(Point::new(0.0, 50.0)));
    assert_eq!(cells.get(5).map(|c| c.origin), Some(Point::new(50.0, 50.0)));
    assert!(cells.iter().all(|cell| !cell.is_diagnostic()));
    // Every cell of an uncut pattern is a straight-through crossing,
    // which always emits two fills and one stroke.
    assert!(cells.iter().all(|cell| cell.paths.len() == 3));
}

#[test]
fn test_every_cell_emits_fill_and_stroke_geometry() {
    let mut session = KnotSession::new();
    session.randomize_pattern(5);

    for cell in session.render() {
        assert!(cell.paths.iter().any(|p| p.role == PaintRole::Fill));
        assert!(cell.paths.iter().any(|p| p.role == PaintRole::Stroke));
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let mut session = KnotSession::new();
    session.randomize_pattern(17);
    assert_eq!(session.render(), session.render());
}
