//! Command-line interface for generating knotwork patterns as SVG files

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::io::configuration::{DEFAULT_SEED, DEFAULT_SYMMETRY_WEIGHT};
use crate::io::error::Result;
use crate::io::{pattern_file, svg};
use crate::pattern::generator::GeneratorOptions;
use crate::pattern::grid::BorderState;
use crate::render::session::KnotSession;

#[derive(Parser)]
#[command(name = "knotweave")]
#[command(
    author,
    version,
    about = "Generate Celtic knotwork patterns as SVG vector graphics"
)]
/// Command-line arguments for the knotwork generation tool
pub struct Cli {
    /// Output SVG file
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Knot height in cells (odd values round up)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Knot width in cells (odd values round up)
    #[arg(short, long)]
    pub columns: Option<usize>,

    /// Number of random cut placements (default: 30% of the cut grid)
    #[arg(long)]
    pub cuts: Option<usize>,

    /// Relative weight of left-right mirrored placements
    #[arg(long, default_value_t = DEFAULT_SYMMETRY_WEIGHT)]
    pub bilateral: u32,

    /// Relative weight of four-quadrant mirrored placements
    #[arg(long, default_value_t = DEFAULT_SYMMETRY_WEIGHT)]
    pub quadrilateral: u32,

    /// Cell side length in pixels
    #[arg(long)]
    pub cell_size: Option<f64>,

    /// Strand ribbon width in pixels
    #[arg(long)]
    pub string_size: Option<f64>,

    /// Outline stroke width in pixels
    #[arg(long)]
    pub stroke_width: Option<f64>,

    /// Strand fill color
    #[arg(long)]
    pub string_color: Option<String>,

    /// Outline stroke color
    #[arg(long)]
    pub stroke_color: Option<String>,

    /// Background color
    #[arg(long)]
    pub background_color: Option<String>,

    /// Close the border so no strand ends dangle at the edges
    #[arg(long)]
    pub closed: bool,

    /// Skip random generation, producing the fully woven pattern
    #[arg(long)]
    pub empty: bool,

    /// Load the pattern from a file instead of generating one
    #[arg(short, long, value_name = "PATTERN")]
    pub load: Option<PathBuf>,

    /// Save the pattern alongside the SVG output
    #[arg(long, value_name = "PATTERN")]
    pub save: Option<PathBuf>,
}

impl Cli {
    /// Build the session described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error when a loaded pattern file is missing or
    /// malformed, or when the requested dimensions are out of range.
    fn build_session(&self) -> Result<KnotSession> {
        let mut session = match &self.load {
            Some(path) => pattern_file::load(path)?,
            None => KnotSession::new(),
        };

        if self.rows.is_some() || self.columns.is_some() {
            let rows = self.rows.unwrap_or_else(|| session.settings().rows());
            let columns = self.columns.unwrap_or_else(|| session.settings().columns());
            session.set_grid_size(rows, columns)?;
        }
        if let Some(size) = self.cell_size {
            session.set_cell_size(size);
        }
        if let Some(size) = self.string_size {
            session.set_string_size(size);
        }
        if let Some(width) = self.stroke_width {
            session.set_stroke_width(width);
        }
        if let Some(color) = &self.string_color {
            session.set_string_color(color.clone());
        }
        if let Some(color) = &self.stroke_color {
            session.set_stroke_color(color.clone());
        }
        if let Some(color) = &self.background_color {
            session.set_background_color(color.clone());
        }

        // Loaded patterns are kept as-is unless a resize discarded them.
        let generate = self.load.is_none() || self.rows.is_some() || self.columns.is_some();
        if generate && !self.empty {
            let options = GeneratorOptions {
                total_cuts: self.cuts,
                bilateral_weight: self.bilateral,
                quadrilateral_weight: self.quadrilateral,
            };
            let mut rng = StdRng::seed_from_u64(self.seed);
            session.randomize_pattern_with(&options, &mut rng);
        }

        if self.closed {
            session.set_border_state(BorderState::Closed);
        }
        Ok(session)
    }
}

/// Run the tool: build the pattern and write the requested files
///
/// # Errors
///
/// Returns an error when the session cannot be built or an output file
/// cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let session = cli.build_session()?;
    let cells = session.render();
    svg::write_svg_file(&cli.output, &cells, session.settings())?;

    if let Some(path) = &cli.save {
        pattern_file::save(path, &session)?;
    }
    Ok(())
}
