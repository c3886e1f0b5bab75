//! End-to-end evaluation pipeline
//!
//! The process shape of the tool: consume one grid, evaluate it, produce one
//! grid. Load failures are fatal; cell failures render inline.

use std::io::{Read, Write};

use thiserror::Error;
use tiny_sheets_tsv::{LoadError, TsvReader, TsvWriter};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort the pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// The grid could not be loaded
    #[error("load failed: {0}")]
    Load(#[from] LoadError),

    /// Writing the evaluated grid failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a grid from `input`, evaluate it, and print it to `output`
///
/// ```rust
/// let input = "2\t2\n1\t=A1+1\n=B1*2\t'done\n";
/// let mut output = Vec::new();
/// tiny_sheets::evaluate(input.as_bytes(), &mut output).unwrap();
/// assert_eq!(output, b"1\t2\n4\tdone\n");
/// ```
pub fn evaluate<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    let grid = TsvReader::read(input)?;
    TsvWriter::write(&grid, output)?;
    Ok(())
}
