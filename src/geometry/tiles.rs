//! Base tile constructors and transform combinators
//!
//! Four base shapes cover every knot cell: a straight-through diagonal
//! crossing, a 90° corner, a straight run, and a curved crossing that
//! passes either over or under the intersecting strand. Rotating and
//! mirroring these bases yields all 36 variants the selection matrix
//! needs; the transforms act on output coordinates only.
//!
//! The curve control constants are empirically tuned aesthetic
//! choices, not derived quantities.

use crate::geometry::path::{Path, PathCommand, Point, Rotation};

/// Control-point inset at the top of the curved crossing, in pixels
const TOP_CP_LENGTH: f64 = 2.0;

/// Fraction of the crossing offset used for the mid-curve control points
const MID_CP_FACTOR: f64 = 0.4;

/// Cosmetic inputs shared by every tile constructor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileStyle {
    /// Side length of the square cell, in pixels
    pub cell_size: f64,
    /// Width of the strand ribbon, in pixels
    pub string_size: f64,
}

impl TileStyle {
    /// Half the cell side length
    #[must_use]
    pub const fn half_cell(&self) -> f64 {
        self.cell_size / 2.0
    }

    /// Half the strand width
    #[must_use]
    pub const fn half_string(&self) -> f64 {
        self.string_size / 2.0
    }

    /// Perpendicular offset of a diagonal strand edge from the cell
    /// corner, `round(string_size / √2)`
    #[must_use]
    pub fn crossing_offset(&self) -> f64 {
        (self.string_size / std::f64::consts::SQRT_2).round()
    }
}

/// The base shapes every tile variant is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseTile {
    /// Diagonal strand (bottom-left to top-right) crossing another at
    /// the corner, passing over it
    StraightCross,
    /// Strand turning 90°, opening toward the bottom right
    Corner,
    /// Horizontal strand passing straight through the cell
    StraightRun,
    /// Vertical strand curving right at the top, crossing over
    CurvedCrossOver,
    /// Vertical strand curving right at the top, crossing under
    CurvedCrossUnder,
    /// Red crossed-out square marking an unmapped matrix entry
    Diagnostic,
}

impl BaseTile {
    /// Emit the path set for this base shape in cell-local coordinates
    #[must_use]
    pub fn paths(self, style: &TileStyle) -> Vec<Path> {
        match self {
            Self::StraightCross => straight_cross(style),
            Self::Corner => corner(style),
            Self::StraightRun => straight_run(style),
            Self::CurvedCrossOver => curved_cross(style, true),
            Self::CurvedCrossUnder => curved_cross(style, false),
            Self::Diagnostic => diagnostic(style),
        }
    }
}

/// A single output-coordinate transform applied after drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Clockwise rotation about the cell center
    Rotate(Rotation),
    /// Reflection across the cell's vertical midline
    MirrorHorizontal,
}

/// A base tile together with the transforms that derive the variant
///
/// Transforms are applied in order, innermost first, so
/// `TileVariant::of(base).mirrored().rotated(r)` matches a rotation of
/// a mirrored tile.
#[derive(Debug, Clone, PartialEq)]
pub struct TileVariant {
    base: BaseTile,
    transforms: Vec<Transform>,
}

impl TileVariant {
    /// An untransformed base tile
    #[must_use]
    pub const fn of(base: BaseTile) -> Self {
        Self {
            base,
            transforms: Vec::new(),
        }
    }

    /// Wrap the variant in a clockwise rotation about the cell center
    #[must_use]
    pub fn rotated(mut self, rotation: Rotation) -> Self {
        self.transforms.push(Transform::Rotate(rotation));
        self
    }

    /// Wrap the variant in a horizontal mirror about the cell midline
    #[must_use]
    pub fn mirrored(mut self) -> Self {
        self.transforms.push(Transform::MirrorHorizontal);
        self
    }

    /// Whether this variant is the diagnostic error tile
    #[must_use]
    pub fn is_diagnostic(&self) -> bool {
        self.base == BaseTile::Diagnostic
    }

    /// Emit the transformed path set in cell-local coordinates
    #[must_use]
    pub fn paths(&self, style: &TileStyle) -> Vec<Path> {
        let mut paths = self.base.paths(style);
        for transform in &self.transforms {
            paths = paths
                .iter()
                .map(|path| match transform {
                    Transform::Rotate(rotation) => {
                        path.map_points(|p| p.rotated(style.cell_size, *rotation))
                    }
                    Transform::MirrorHorizontal => {
                        path.map_points(|p| p.mirrored(style.cell_size))
                    }
                })
                .collect();
        }
        paths
    }
}

/// Diagonal strand crossing another at the corner
///
/// The ribbon body and a small corner triangle are filled separately;
/// the triangle repaints the area where the other strand passes under.
fn straight_cross(style: &TileStyle) -> Vec<Path> {
    let cell = style.cell_size;
    let h = style.crossing_offset();

    let body = Path::filled(vec![
        PathCommand::MoveTo(Point::new(0.0, cell)),
        PathCommand::LineTo(Point::new(0.0, cell - h)),
        PathCommand::LineTo(Point::new(cell - h, 0.0)),
        PathCommand::LineTo(Point::new(cell, 0.0)),
        PathCommand::LineTo(Point::new(cell, h)),
        PathCommand::LineTo(Point::new(h, cell)),
        PathCommand::Close,
    ]);

    let corner_triangle = Path::filled(vec![
        PathCommand::MoveTo(Point::new(cell - h, 0.0)),
        PathCommand::LineTo(Point::new(cell, 0.0)),
        PathCommand::LineTo(Point::new(cell, h)),
        PathCommand::Close,
    ]);

    let outline = Path::stroked(vec![
        PathCommand::MoveTo(Point::new(0.0, cell - h)),
        PathCommand::LineTo(Point::new(cell - h, 0.0)),
        PathCommand::MoveTo(Point::new(h, cell)),
        PathCommand::LineTo(Point::new(cell, h)),
        PathCommand::LineTo(Point::new(cell - h, 0.0)),
    ]);

    vec![body, corner_triangle, outline]
}

/// Strand turning 90°, built from two quadratic curves
fn corner(style: &TileStyle) -> Vec<Path> {
    let hc = style.half_cell();
    let hs = style.half_string();
    let outer = hc + hs;
    let inner = hc - hs;

    let body = Path::filled(vec![
        PathCommand::MoveTo(Point::new(inner, 0.0)),
        PathCommand::LineTo(Point::new(outer, 0.0)),
        PathCommand::QuadTo {
            control: Point::new(outer, outer),
            to: Point::new(0.0, outer),
        },
        PathCommand::LineTo(Point::new(0.0, inner)),
        PathCommand::QuadTo {
            control: Point::new(inner, inner),
            to: Point::new(inner, 0.0),
        },
        PathCommand::Close,
    ]);

    let outline = Path::stroked(vec![
        // Outer curve
        PathCommand::MoveTo(Point::new(outer, 0.0)),
        PathCommand::QuadTo {
            control: Point::new(outer, outer),
            to: Point::new(0.0, outer),
        },
        // Inner curve
        PathCommand::MoveTo(Point::new(0.0, inner)),
        PathCommand::QuadTo {
            control: Point::new(inner, inner),
            to: Point::new(inner, 0.0),
        },
    ]);

    vec![body, outline]
}

/// Horizontal strand passing straight through the cell
fn straight_run(style: &TileStyle) -> Vec<Path> {
    let cell = style.cell_size;
    let top = style.half_cell() - style.half_string();
    let bottom = style.half_cell() + style.half_string();

    let body = Path::filled(vec![
        PathCommand::MoveTo(Point::new(0.0, top)),
        PathCommand::LineTo(Point::new(cell, top)),
        PathCommand::LineTo(Point::new(cell, bottom)),
        PathCommand::LineTo(Point::new(0.0, bottom)),
        PathCommand::Close,
    ]);

    let outline = Path::stroked(vec![
        PathCommand::MoveTo(Point::new(0.0, top)),
        PathCommand::LineTo(Point::new(cell, top)),
        PathCommand::MoveTo(Point::new(0.0, bottom)),
        PathCommand::LineTo(Point::new(cell, bottom)),
    ]);

    vec![body, outline]
}

/// Left-hand cubic of the curved crossing, bottom edge toward the top
fn curved_left_side(style: &TileStyle, h: f64) -> PathCommand {
    let cell = style.cell_size;
    PathCommand::CubicTo {
        control1: Point::new(
            style.half_cell() - style.half_string(),
            style.half_cell() - h * MID_CP_FACTOR,
        ),
        control2: Point::new((cell - h) - TOP_CP_LENGTH, TOP_CP_LENGTH),
        to: Point::new(cell - h, 0.0),
    }
}

/// Right-hand cubic of the curved crossing, top edge toward the bottom
fn curved_right_side(style: &TileStyle, h: f64) -> PathCommand {
    let cell = style.cell_size;
    PathCommand::CubicTo {
        control1: Point::new(cell - TOP_CP_LENGTH, h + TOP_CP_LENGTH),
        control2: Point::new(
            style.half_cell() + style.half_string(),
            style.half_cell() + h * MID_CP_FACTOR,
        ),
        to: Point::new(style.half_cell() + style.half_string(), cell),
    }
}

/// Vertical strand curving right at the top while crossing another
///
/// `cross_over` selects whether the near strand passes over the other
/// one; passing under adds the small corner triangle that simulates
/// occlusion and keeps the outline continuous across the gap.
fn curved_cross(style: &TileStyle, cross_over: bool) -> Vec<Path> {
    let cell = style.cell_size;
    let h = style.crossing_offset();
    let left_edge = style.half_cell() - style.half_string();

    let mut paths = vec![Path::filled(vec![
        PathCommand::MoveTo(Point::new(left_edge, cell)),
        curved_left_side(style, h),
        PathCommand::LineTo(Point::new(cell, 0.0)),
        PathCommand::LineTo(Point::new(cell, h)),
        curved_right_side(style, h),
        PathCommand::Close,
    ])];

    if !cross_over {
        paths.push(Path::filled(vec![
            PathCommand::MoveTo(Point::new(cell - h, 0.0)),
            PathCommand::LineTo(Point::new(cell, 0.0)),
            PathCommand::LineTo(Point::new(cell, h)),
            PathCommand::Close,
        ]));
    }

    let mut outline = vec![
        PathCommand::MoveTo(Point::new(left_edge, cell)),
        curved_left_side(style, h),
    ];
    if cross_over {
        outline.push(PathCommand::MoveTo(Point::new(cell, h)));
    } else {
        outline.push(PathCommand::LineTo(Point::new(cell, h)));
    }
    outline.push(curved_right_side(style, h));
    paths.push(Path::stroked(outline));

    paths
}

/// Red crossed-out square used when a matrix entry is unmapped
fn diagnostic(style: &TileStyle) -> Vec<Path> {
    let cell = style.cell_size;
    let offset = (style.half_cell() * 0.25 + 1.0).round();

    let square = vec![
        PathCommand::MoveTo(Point::new(0.0, 0.0)),
        PathCommand::LineTo(Point::new(cell, 0.0)),
        PathCommand::LineTo(Point::new(cell, cell)),
        PathCommand::LineTo(Point::new(0.0, cell)),
        PathCommand::Close,
    ];

    let cross = Path::stroked(vec![
        PathCommand::MoveTo(Point::new(offset, offset)),
        PathCommand::LineTo(Point::new(cell - offset, cell - offset)),
        PathCommand::MoveTo(Point::new(offset, cell - offset)),
        PathCommand::LineTo(Point::new(cell - offset, offset)),
    ]);

    vec![
        Path::diagnostic(square.clone()),
        Path::stroked(square),
        cross,
    ]
}
