//! Text persistence of settings and cut grids
//!
//! Patterns are stored in a small line-oriented format: a `[knot]`
//! section of `key=value` settings followed by a `[cuts]` section with
//! one line per cut row, each entry a single character (`-`, `H`, `V`).
//! Floating-point values round-trip exactly through their display
//! form, so a saved pattern renders identically after loading.

use std::fs;
use std::path::Path;

use crate::io::error::{Result, file_system_error, parse_error};
use crate::pattern::grid::{CutGrid, CutState};
use crate::render::session::KnotSession;
use crate::render::settings::KnotSettings;

/// Serialize a session into the pattern text format
#[must_use]
pub fn to_text(session: &KnotSession) -> String {
    let settings = session.settings();
    let grid = session.grid();

    let mut text = String::new();
    text.push_str("[knot]\n");
    text.push_str(&format!("rows={}\n", settings.rows()));
    text.push_str(&format!("columns={}\n", settings.columns()));
    text.push_str(&format!("cell_size={}\n", settings.cell_size()));
    text.push_str(&format!("string_size={}\n", settings.string_size()));
    text.push_str(&format!("stroke_width={}\n", settings.stroke_width()));
    text.push_str(&format!("string_color={}\n", settings.string_color()));
    text.push_str(&format!("stroke_color={}\n", settings.stroke_color()));
    text.push_str(&format!(
        "background_color={}\n",
        settings.background_color()
    ));
    text.push('\n');
    text.push_str("[cuts]\n");
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            text.push(grid.cut_at(row, column).symbol());
        }
        text.push('\n');
    }
    text
}

/// Accumulates `[knot]` section values before the session is built
#[derive(Default)]
struct SettingsDraft {
    rows: Option<usize>,
    columns: Option<usize>,
    cell_size: Option<f64>,
    string_size: Option<f64>,
    stroke_width: Option<f64>,
    string_color: Option<String>,
    stroke_color: Option<String>,
    background_color: Option<String>,
}

impl SettingsDraft {
    fn assign(&mut self, line_number: usize, key: &str, value: &str) -> Result<()> {
        match key {
            "rows" => self.rows = Some(parse_number(line_number, key, value)?),
            "columns" => self.columns = Some(parse_number(line_number, key, value)?),
            "cell_size" => self.cell_size = Some(parse_number(line_number, key, value)?),
            "string_size" => self.string_size = Some(parse_number(line_number, key, value)?),
            "stroke_width" => self.stroke_width = Some(parse_number(line_number, key, value)?),
            "string_color" => self.string_color = Some(value.to_string()),
            "stroke_color" => self.stroke_color = Some(value.to_string()),
            "background_color" => self.background_color = Some(value.to_string()),
            _ => return Err(parse_error(line_number, format!("unknown key '{key}'"))),
        }
        Ok(())
    }

    fn build(self, line_number: usize) -> Result<KnotSettings> {
        let rows = self
            .rows
            .ok_or_else(|| parse_error(line_number, "missing 'rows'"))?;
        let columns = self
            .columns
            .ok_or_else(|| parse_error(line_number, "missing 'columns'"))?;

        let mut settings = KnotSettings::default();
        settings
            .set_grid_size(rows, columns)
            .map_err(|error| parse_error(line_number, error.to_string()))?;
        if let Some(size) = self.cell_size {
            settings.set_cell_size(size);
        }
        if let Some(size) = self.string_size {
            settings.set_string_size(size);
        }
        if let Some(width) = self.stroke_width {
            settings.set_stroke_width(width);
        }
        if let Some(color) = self.string_color {
            settings.set_string_color(color);
        }
        if let Some(color) = self.stroke_color {
            settings.set_stroke_color(color);
        }
        if let Some(color) = self.background_color {
            settings.set_background_color(color);
        }
        Ok(settings)
    }
}

fn parse_number<T>(line_number: usize, key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|error| {
        parse_error(
            line_number,
            format!("invalid number for '{key}': '{value}' ({error})"),
        )
    })
}

/// Which section the parser is currently inside
enum Section {
    Preamble,
    Knot,
    Cuts,
}

/// Parse the pattern text format back into a session
///
/// # Errors
///
/// Returns [`KnotError::PatternParse`](crate::KnotError) with a 1-based
/// line number for malformed headers, keys, values, or cut rows, and
/// when the cut grid does not match the declared dimensions.
pub fn from_text(text: &str) -> Result<KnotSession> {
    let mut section = Section::Preamble;
    let mut draft = SettingsDraft::default();
    let mut settings: Option<KnotSettings> = None;
    let mut grid: Option<CutGrid> = None;
    let mut cut_row = 0;
    let mut last_line = 0;

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        last_line = line_number;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "[knot]" => {
                section = Section::Knot;
                continue;
            }
            "[cuts]" => {
                let built = std::mem::take(&mut draft).build(line_number)?;
                grid = Some(CutGrid::new(built.cut_rows(), built.cut_columns()));
                settings = Some(built);
                section = Section::Cuts;
                continue;
            }
            _ => {}
        }

        match section {
            Section::Preamble => {
                return Err(parse_error(line_number, "expected '[knot]' header"));
            }
            Section::Knot => {
                let (key, value) = line
                    .split_once('=')
                    .ok_or_else(|| parse_error(line_number, "expected 'key=value'"))?;
                draft.assign(line_number, key.trim(), value.trim())?;
            }
            Section::Cuts => {
                let Some(target) = grid.as_mut() else {
                    return Err(parse_error(line_number, "cut row before '[cuts]' header"));
                };
                if cut_row >= target.rows() {
                    return Err(parse_error(line_number, "too many cut rows"));
                }
                if line.chars().count() != target.columns() {
                    return Err(parse_error(
                        line_number,
                        format!("expected {} entries in cut row", target.columns()),
                    ));
                }
                for (column, symbol) in line.chars().enumerate() {
                    let state = CutState::from_symbol(symbol).ok_or_else(|| {
                        parse_error(line_number, format!("invalid cut character '{symbol}'"))
                    })?;
                    target.set(cut_row, column, state);
                }
                cut_row += 1;
            }
        }
    }

    let settings = settings.ok_or_else(|| parse_error(last_line, "missing '[cuts]' section"))?;
    let grid = grid.ok_or_else(|| parse_error(last_line, "missing '[cuts]' section"))?;
    if cut_row != grid.rows() {
        return Err(parse_error(
            last_line,
            format!("expected {} cut rows, found {cut_row}", grid.rows()),
        ));
    }
    KnotSession::from_parts(settings, grid)
}

/// Save a session to a pattern file
///
/// # Errors
///
/// Returns [`KnotError::FileSystem`](crate::KnotError) when the file
/// cannot be written.
pub fn save(path: impl AsRef<Path>, session: &KnotSession) -> Result<()> {
    fs::write(path.as_ref(), to_text(session))
        .map_err(|source| file_system_error(path.as_ref(), "write", source))
}

/// Load a session from a pattern file
///
/// # Errors
///
/// Returns [`KnotError::FileSystem`](crate::KnotError) when the file
/// cannot be read, or [`KnotError::PatternParse`](crate::KnotError)
/// when its content is malformed.
pub fn load(path: impl AsRef<Path>) -> Result<KnotSession> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|source| file_system_error(path.as_ref(), "read", source))?;
    from_text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_randomized_session() {
        let mut session = KnotSession::new();
        session.randomize_pattern(11);
        session.set_string_color("#123456");

        let text = to_text(&session);
        let restored = from_text(&text).unwrap();

        assert_eq!(restored.grid(), session.grid());
        assert_eq!(restored.settings(), session.settings());
    }

    #[test]
    fn rejects_wrong_cut_row_width() {
        let text = "[knot]\nrows=4\ncolumns=4\n[cuts]\n--\n---\n---\n---\n---\n";
        assert!(from_text(text).is_err());
    }

    #[test]
    fn rejects_unknown_keys_with_line_number() {
        let text = "[knot]\nrows=4\nbogus=1\n";
        let error = from_text(text).map(|_| ()).unwrap_err();
        assert!(error.to_string().contains("line 3"));
    }

    #[test]
    fn rejects_missing_cuts_section() {
        let text = "[knot]\nrows=4\ncolumns=4\n";
        assert!(from_text(text).is_err());
    }

    #[test]
    fn rejects_invalid_cut_characters() {
        let text = "[knot]\nrows=4\ncolumns=4\n[cuts]\n--X\n---\n---\n---\n---\n";
        let error = from_text(text).map(|_| ()).unwrap_err();
        assert!(error.to_string().contains('X'));
    }
}
