//! CLI entry point for the knotwork pattern generator

use clap::Parser;
use knotweave::io::cli::{self, Cli};

fn main() -> knotweave::Result<()> {
    let cli = Cli::parse();
    cli::run(&cli)
}
