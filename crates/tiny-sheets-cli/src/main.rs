//! tiny-sheets CLI - evaluate a tab-separated grid

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tiny_sheets::prelude::*;

#[derive(Parser)]
#[command(name = "tinysheets")]
#[command(
    author,
    version,
    about = "Evaluate a tab-separated spreadsheet grid and print the result"
)]
struct Cli {
    /// Input grid file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let grid = load_grid(cli.input.as_ref())?;

    match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create '{}'", path.display()))?;
            TsvWriter::write(&grid, file)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            TsvWriter::write(&grid, &mut handle).context("Failed to write to stdout")?;
            handle.flush()?;
        }
    }

    Ok(())
}

fn load_grid(input: Option<&PathBuf>) -> Result<Grid> {
    let grid = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open '{}'", path.display()))?;
            TsvReader::read(file)
        }
        None => TsvReader::read(io::stdin().lock()),
    };

    grid.context("Failed to load grid")
}
