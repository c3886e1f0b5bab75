//! TSV grid writer
//!
//! Printing is what triggers evaluation: every cell is read through the
//! evaluator, and a raised cell error renders inline as `#` plus its stable
//! token instead of aborting the run.

use std::io::Write;

use tiny_sheets_core::Grid;
use tiny_sheets_formula::Evaluator;

/// Marker prefixed to an error token in the output
pub const ERROR_MARKER: char = '#';

/// Grid writer for the tab-separated output format
pub struct TsvWriter;

impl TsvWriter {
    /// Render the evaluated grid to a string, cells tab-separated, rows
    /// newline-terminated
    pub fn to_string(grid: &Grid) -> String {
        let eval = Evaluator::new(grid);
        let mut out = String::new();

        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                match eval.string_value(row, col) {
                    Ok(value) => out.push_str(&value),
                    Err(kind) => {
                        out.push(ERROR_MARKER);
                        out.push_str(kind.as_str());
                    }
                }
                if col < grid.cols() - 1 {
                    out.push('\t');
                }
            }
            out.push('\n');
        }

        out
    }

    /// Write the evaluated grid to any byte sink
    ///
    /// The whole grid fits in memory by construction (at most 9x26 cells),
    /// so rendering happens up front and the sink sees a single write.
    pub fn write<W: Write>(grid: &Grid, mut writer: W) -> std::io::Result<()> {
        writer.write_all(Self::to_string(grid).as_bytes())?;
        writer.flush()
    }
}
