//! Vector path commands and pure coordinate transforms
//!
//! Tiles describe their geometry as sequences of path commands in a
//! local coordinate frame where the cell is a `cell_size × cell_size`
//! square with origin at its top-left corner. Rotations and mirroring
//! are applied to output coordinates, never by re-deriving shapes.

/// A point in cell-local or pattern coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate in pixels
    pub x: f64,
    /// Vertical coordinate in pixels, growing downward
    pub y: f64,
}

/// Clockwise quarter-turn rotations about the cell center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// 90 degrees clockwise
    Quarter,
    /// 180 degrees
    Half,
    /// 270 degrees clockwise
    ThreeQuarter,
}

impl Point {
    /// Create a point from pixel coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Shift the point by a cell-origin offset
    #[must_use]
    pub const fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Rotate clockwise about the center of a `cell_size` square
    ///
    /// Quarter-turn arithmetic is spelled out per case so the transform
    /// stays exact for axis-aligned coordinates.
    #[must_use]
    pub const fn rotated(self, cell_size: f64, rotation: Rotation) -> Self {
        let c = cell_size / 2.0;
        match rotation {
            Rotation::Quarter => Self {
                x: c - (self.y - c),
                y: c + (self.x - c),
            },
            Rotation::Half => Self {
                x: cell_size - self.x,
                y: cell_size - self.y,
            },
            Rotation::ThreeQuarter => Self {
                x: c + (self.y - c),
                y: c - (self.x - c),
            },
        }
    }

    /// Mirror across the vertical midline of a `cell_size` square
    #[must_use]
    pub const fn mirrored(self, cell_size: f64) -> Self {
        Self {
            x: cell_size - self.x,
            y: self.y,
        }
    }

    /// Componentwise comparison within an absolute tolerance
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

/// A single drawing command within a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the point
    MoveTo(Point),
    /// Straight segment to the point
    LineTo(Point),
    /// Quadratic Bézier segment
    QuadTo {
        /// Control point
        control: Point,
        /// Endpoint
        to: Point,
    },
    /// Cubic Bézier segment
    CubicTo {
        /// First control point
        control1: Point,
        /// Second control point
        control2: Point,
        /// Endpoint
        to: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// Apply a point transform to every coordinate of the command
    #[must_use]
    pub fn map_points(self, f: impl Fn(Point) -> Point) -> Self {
        match self {
            Self::MoveTo(p) => Self::MoveTo(f(p)),
            Self::LineTo(p) => Self::LineTo(f(p)),
            Self::QuadTo { control, to } => Self::QuadTo {
                control: f(control),
                to: f(to),
            },
            Self::CubicTo {
                control1,
                control2,
                to,
            } => Self::CubicTo {
                control1: f(control1),
                control2: f(control2),
                to: f(to),
            },
            Self::Close => Self::Close,
        }
    }

    /// Compare two commands within an absolute coordinate tolerance
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::MoveTo(a), Self::MoveTo(b)) | (Self::LineTo(a), Self::LineTo(b)) => {
                a.approx_eq(b, tolerance)
            }
            (
                Self::QuadTo { control, to },
                Self::QuadTo {
                    control: other_control,
                    to: other_to,
                },
            ) => control.approx_eq(other_control, tolerance) && to.approx_eq(other_to, tolerance),
            (
                Self::CubicTo {
                    control1,
                    control2,
                    to,
                },
                Self::CubicTo {
                    control1: other_control1,
                    control2: other_control2,
                    to: other_to,
                },
            ) => {
                control1.approx_eq(other_control1, tolerance)
                    && control2.approx_eq(other_control2, tolerance)
                    && to.approx_eq(other_to, tolerance)
            }
            (Self::Close, Self::Close) => true,
            _ => false,
        }
    }
}

/// How a path participates in painting
///
/// The core emits geometry tagged with a role; the presentation layer
/// maps roles to concrete colors. Only the diagnostic role carries a
/// fixed color, so defective matrix entries stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintRole {
    /// Filled with the strand color
    Fill,
    /// Stroked with the outline color
    Stroke,
    /// Diagnostic marker, always rendered red
    Diagnostic,
}

/// A sequence of path commands with a paint role
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Painting role resolved by the presentation layer
    pub role: PaintRole,
    /// Drawing commands in order
    pub commands: Vec<PathCommand>,
}

impl Path {
    /// Create a strand-fill path
    #[must_use]
    pub const fn filled(commands: Vec<PathCommand>) -> Self {
        Self {
            role: PaintRole::Fill,
            commands,
        }
    }

    /// Create an outline-stroke path
    #[must_use]
    pub const fn stroked(commands: Vec<PathCommand>) -> Self {
        Self {
            role: PaintRole::Stroke,
            commands,
        }
    }

    /// Create a diagnostic-fill path
    #[must_use]
    pub const fn diagnostic(commands: Vec<PathCommand>) -> Self {
        Self {
            role: PaintRole::Diagnostic,
            commands,
        }
    }

    /// Apply a point transform to every command of the path
    #[must_use]
    pub fn map_points(&self, f: impl Fn(Point) -> Point) -> Self {
        Self {
            role: self.role,
            commands: self
                .commands
                .iter()
                .map(|command| command.map_points(&f))
                .collect(),
        }
    }

    /// Shift the whole path by a cell-origin offset
    #[must_use]
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_points(|p| p.translated(dx, dy))
    }

    /// Compare two paths within an absolute coordinate tolerance
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.role == other.role
            && self.commands.len() == other.commands.len()
            && self
                .commands
                .iter()
                .zip(other.commands.iter())
                .all(|(a, b)| a.approx_eq(*b, tolerance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_rotation_moves_top_left_to_top_right() {
        let p = Point::new(0.0, 0.0).rotated(50.0, Rotation::Quarter);
        assert!(p.approx_eq(Point::new(50.0, 0.0), 1e-12));
    }

    #[test]
    fn half_rotation_is_point_reflection() {
        let p = Point::new(10.0, 20.0).rotated(50.0, Rotation::Half);
        assert!(p.approx_eq(Point::new(40.0, 30.0), 1e-12));
    }

    #[test]
    fn mirror_reflects_across_vertical_midline() {
        let p = Point::new(10.0, 20.0).mirrored(50.0);
        assert!(p.approx_eq(Point::new(40.0, 20.0), 1e-12));
    }

    #[test]
    fn translation_applies_to_all_command_points() {
        let path = Path::stroked(vec![
            PathCommand::MoveTo(Point::new(1.0, 2.0)),
            PathCommand::QuadTo {
                control: Point::new(3.0, 4.0),
                to: Point::new(5.0, 6.0),
            },
            PathCommand::Close,
        ]);
        let shifted = path.translated(10.0, 100.0);
        let expected = Path::stroked(vec![
            PathCommand::MoveTo(Point::new(11.0, 102.0)),
            PathCommand::QuadTo {
                control: Point::new(13.0, 104.0),
                to: Point::new(15.0, 106.0),
            },
            PathCommand::Close,
        ]);
        assert_eq!(shifted, expected);
    }
}
