//! SVG serialization of rendered patterns
//!
//! Produces a standalone SVG document from the renderer's per-cell
//! output. Geometry stays cell-local: every cell becomes a `<g>` with
//! a translate transform, mirroring how the renderer positions tiles.

use std::fs;
use std::path::Path as FilePath;

use crate::geometry::path::{PaintRole, Path, PathCommand};
use crate::io::error::{Result, file_system_error};
use crate::render::knotwork::CellRender;
use crate::render::settings::KnotSettings;

/// Fixed color of diagnostic placeholder tiles
const DIAGNOSTIC_COLOR: &str = "#FF0000";

/// Escape a string for use inside XML attribute values and text
fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a path's commands as an SVG `d` attribute value
fn path_data(path: &Path) -> String {
    let mut data = String::new();
    for command in &path.commands {
        if !data.is_empty() {
            data.push(' ');
        }
        match *command {
            PathCommand::MoveTo(p) => {
                data.push_str(&format!("M {:.2} {:.2}", p.x, p.y));
            }
            PathCommand::LineTo(p) => {
                data.push_str(&format!("L {:.2} {:.2}", p.x, p.y));
            }
            PathCommand::QuadTo { control, to } => {
                data.push_str(&format!(
                    "Q {:.2} {:.2} {:.2} {:.2}",
                    control.x, control.y, to.x, to.y
                ));
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                data.push_str(&format!(
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
                    control1.x, control1.y, control2.x, control2.y, to.x, to.y
                ));
            }
            PathCommand::Close => data.push('Z'),
        }
    }
    data
}

/// Paint attributes for a path role
fn paint_attributes(role: PaintRole, settings: &KnotSettings) -> String {
    match role {
        PaintRole::Fill => format!(
            r#"fill="{}" stroke="none""#,
            xml_escape(settings.string_color())
        ),
        PaintRole::Stroke => format!(
            r#"fill="none" stroke="{}" stroke-width="{:.2}""#,
            xml_escape(settings.stroke_color()),
            settings.stroke_width()
        ),
        PaintRole::Diagnostic => format!(r#"fill="{DIAGNOSTIC_COLOR}" stroke="none""#),
    }
}

/// Serialize rendered cells into a complete SVG document
#[must_use]
pub fn to_svg(cells: &[CellRender], settings: &KnotSettings) -> String {
    let (width, height) = settings.pixel_size();

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.2}\" height=\"{height:.2}\" \
         viewBox=\"0 0 {width:.2} {height:.2}\">\n"
    ));
    svg.push_str(&format!(
        "  <desc>Celtic knotwork, {} by {} cells</desc>\n",
        settings.columns(),
        settings.rows()
    ));
    svg.push_str(&format!(
        "  <rect width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\"/>\n",
        xml_escape(settings.background_color())
    ));
    svg.push_str("  <g stroke-linecap=\"square\" stroke-linejoin=\"round\">\n");

    for cell in cells {
        svg.push_str(&format!(
            "    <g transform=\"translate({:.2} {:.2})\">\n",
            cell.origin.x, cell.origin.y
        ));
        for path in &cell.paths {
            svg.push_str(&format!(
                "      <path d=\"{}\" {}/>\n",
                path_data(path),
                paint_attributes(path.role, settings)
            ));
        }
        svg.push_str("    </g>\n");
    }

    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

/// Serialize rendered cells and write them to an SVG file
///
/// # Errors
///
/// Returns [`KnotError::FileSystem`](crate::KnotError) when the file
/// cannot be written.
pub fn write_svg_file(
    path: impl AsRef<FilePath>,
    cells: &[CellRender],
    settings: &KnotSettings,
) -> Result<()> {
    let document = to_svg(cells, settings);
    fs::write(path.as_ref(), document)
        .map_err(|source| file_system_error(path.as_ref(), "write", source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::path::Point;

    #[test]
    fn escapes_xml_metacharacters() {
        assert_eq!(xml_escape("a<b&\"c\""), "a&lt;b&amp;&quot;c&quot;");
    }

    #[test]
    fn path_data_uses_two_decimal_places() {
        let path = Path::stroked(vec![
            PathCommand::MoveTo(Point::new(1.0, 2.5)),
            PathCommand::QuadTo {
                control: Point::new(3.125, 4.0),
                to: Point::new(5.0, 6.0),
            },
            PathCommand::Close,
        ]);
        assert_eq!(path_data(&path), "M 1.00 2.50 Q 3.13 4.00 5.00 6.00 Z");
    }

    #[test]
    fn document_carries_dimensions_and_background() {
        let settings = KnotSettings::default();
        let svg = to_svg(&[], &settings);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("width=\"636.00\""));
        assert!(svg.contains("height=\"636.00\""));
        assert!(svg.contains("fill=\"#FFFFFF\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn cells_become_translated_groups() {
        let settings = KnotSettings::default();
        let cell = CellRender {
            origin: Point::new(53.0, 106.0),
            paths: vec![Path::filled(vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(10.0, 0.0)),
                PathCommand::Close,
            ])],
        };
        let svg = to_svg(std::slice::from_ref(&cell), &settings);
        assert!(svg.contains("translate(53.00 106.00)"));
        assert!(svg.contains("fill=\"#FF9A39\""));
    }
}
