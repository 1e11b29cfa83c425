//! Validated knot settings
//!
//! Structural settings (grid dimensions) are validated and rejected
//! when out of range; cosmetic settings originate from continuous UI
//! controls and are clamped instead, since a hard error there would be
//! disruptive.

use crate::geometry::tiles::TileStyle;
use crate::io::configuration::{
    COSMETIC_MARGIN, DEFAULT_BACKGROUND_COLOR, DEFAULT_CELL_SIZE, DEFAULT_KNOT_COLUMNS,
    DEFAULT_KNOT_ROWS, DEFAULT_STRING_COLOR, DEFAULT_STRING_SIZE, DEFAULT_STROKE_COLOR,
    DEFAULT_STROKE_WIDTH, MAX_GRID_DIMENSION, MIN_CELL_SIZE, MIN_COSMETIC_SIZE,
    MIN_GRID_DIMENSION,
};
use crate::io::error::{KnotError, Result};

/// Grid dimensions and cosmetic parameters of a knot
///
/// Invariants upheld by every mutator: rows and columns are even and
/// within bounds; strand and stroke widths stay within
/// `[1, cell_size − 2]`; the cell size never drops below its minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSettings {
    rows: usize,
    columns: usize,
    cell_size: f64,
    string_size: f64,
    stroke_width: f64,
    string_color: String,
    stroke_color: String,
    background_color: String,
}

impl Default for KnotSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_KNOT_ROWS,
            columns: DEFAULT_KNOT_COLUMNS,
            cell_size: DEFAULT_CELL_SIZE,
            string_size: DEFAULT_STRING_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            string_color: DEFAULT_STRING_COLOR.to_string(),
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
        }
    }
}

/// Round an odd dimension up to the next even number
const fn normalize_dimension(value: usize) -> usize {
    if value % 2 == 1 { value + 1 } else { value }
}

impl KnotSettings {
    /// Knot height in cells
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Knot width in cells
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Cell side length in pixels
    #[must_use]
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Strand ribbon width in pixels
    #[must_use]
    pub const fn string_size(&self) -> f64 {
        self.string_size
    }

    /// Outline stroke width in pixels
    #[must_use]
    pub const fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Strand fill color
    #[must_use]
    pub fn string_color(&self) -> &str {
        &self.string_color
    }

    /// Outline stroke color
    #[must_use]
    pub fn stroke_color(&self) -> &str {
        &self.stroke_color
    }

    /// Background color
    #[must_use]
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Number of cut rows derived from the knot height
    #[must_use]
    pub const fn cut_rows(&self) -> usize {
        self.rows + 1
    }

    /// Number of cut entries per row derived from the knot width
    #[must_use]
    pub const fn cut_columns(&self) -> usize {
        self.columns / 2 + 1
    }

    /// Pixel dimensions of the rendered pattern, width then height
    #[must_use]
    pub const fn pixel_size(&self) -> (f64, f64) {
        (
            self.columns as f64 * self.cell_size,
            self.rows as f64 * self.cell_size,
        )
    }

    /// Cosmetic inputs passed to tile constructors
    #[must_use]
    pub const fn tile_style(&self) -> TileStyle {
        TileStyle {
            cell_size: self.cell_size,
            string_size: self.string_size,
        }
    }

    /// Set the knot dimensions, in cells
    ///
    /// Odd values are rounded up to the next even number first.
    ///
    /// # Errors
    ///
    /// Returns [`KnotError::InvalidDimension`] when a normalized value
    /// falls outside the allowed range; the settings are unchanged.
    pub fn set_grid_size(&mut self, rows: usize, columns: usize) -> Result<()> {
        let rows = normalize_dimension(rows);
        let columns = normalize_dimension(columns);

        if rows < MIN_GRID_DIMENSION || rows > MAX_GRID_DIMENSION {
            return Err(KnotError::InvalidDimension {
                axis: "rows",
                value: rows,
                min: MIN_GRID_DIMENSION,
                max: MAX_GRID_DIMENSION,
            });
        }
        if columns < MIN_GRID_DIMENSION || columns > MAX_GRID_DIMENSION {
            return Err(KnotError::InvalidDimension {
                axis: "columns",
                value: columns,
                min: MIN_GRID_DIMENSION,
                max: MAX_GRID_DIMENSION,
            });
        }

        self.rows = rows;
        self.columns = columns;
        Ok(())
    }

    /// Set the cell size, clamped to its minimum
    ///
    /// Strand and stroke widths are re-clamped so they keep fitting
    /// inside the cell.
    pub fn set_cell_size(&mut self, size: f64) {
        self.cell_size = size.max(MIN_CELL_SIZE);
        let limit = self.cell_size - COSMETIC_MARGIN;
        self.string_size = self.string_size.min(limit);
        self.stroke_width = self.stroke_width.min(limit);
    }

    /// Set the strand width, clamped to `[1, cell_size − 2]`
    pub fn set_string_size(&mut self, size: f64) {
        self.string_size = size.clamp(MIN_COSMETIC_SIZE, self.cell_size - COSMETIC_MARGIN);
    }

    /// Set the stroke width, clamped to `[1, cell_size − 2]`
    pub fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width.clamp(MIN_COSMETIC_SIZE, self.cell_size - COSMETIC_MARGIN);
    }

    /// Set the strand fill color
    pub fn set_string_color(&mut self, color: impl Into<String>) {
        self.string_color = color.into();
    }

    /// Set the outline stroke color
    pub fn set_stroke_color(&mut self, color: impl Into<String>) {
        self.stroke_color = color.into();
    }

    /// Set the background color
    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.background_color = color.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_dimensions_round_up() {
        let mut settings = KnotSettings::default();
        settings.set_grid_size(5, 7).unwrap();
        assert_eq!(settings.rows(), 6);
        assert_eq!(settings.columns(), 8);
    }

    #[test]
    fn out_of_range_dimensions_keep_prior_state() {
        let mut settings = KnotSettings::default();
        assert!(settings.set_grid_size(2, 12).is_err());
        assert!(settings.set_grid_size(12, 101).is_err());
        assert_eq!(settings.rows(), DEFAULT_KNOT_ROWS);
        assert_eq!(settings.columns(), DEFAULT_KNOT_COLUMNS);
    }

    #[test]
    fn cut_grid_dimensions_follow_knot_size() {
        let settings = KnotSettings::default();
        assert_eq!(settings.cut_rows(), 13);
        assert_eq!(settings.cut_columns(), 7);
    }

    #[test]
    fn shrinking_the_cell_reclamps_widths() {
        let mut settings = KnotSettings::default();
        settings.set_cell_size(16.0);
        assert!((settings.cell_size() - 16.0).abs() < f64::EPSILON);
        assert!(settings.string_size() <= 14.0);
        assert!(settings.stroke_width() <= 14.0);
    }

    #[test]
    fn cell_size_has_a_floor() {
        let mut settings = KnotSettings::default();
        settings.set_cell_size(3.0);
        assert!((settings.cell_size() - MIN_CELL_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn cosmetic_widths_are_clamped_not_rejected() {
        let mut settings = KnotSettings::default();
        settings.set_string_size(500.0);
        assert!((settings.string_size() - 51.0).abs() < f64::EPSILON);
        settings.set_string_size(0.0);
        assert!((settings.string_size() - 1.0).abs() < f64::EPSILON);
    }
}
