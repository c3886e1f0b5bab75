//! TSV grid reader

use std::io::{BufRead, BufReader, Read};

use crate::error::{LoadError, LoadResult};
use tiny_sheets_core::{Cell, CellError, Grid, MAX_COLS, MAX_ROWS};

/// Grid reader for the tab-separated input format
pub struct TsvReader;

impl TsvReader {
    /// Read a grid from any byte source
    ///
    /// The first line carries the shape (`rows<TAB>cols`), the remaining
    /// lines the cells. Missing trailing cells and rows fill in as empty;
    /// extra cells and rows beyond the declared shape are ignored.
    pub fn read<R: Read>(reader: R) -> LoadResult<Grid> {
        let mut lines = BufReader::new(reader).lines();

        let dims = match lines.next() {
            Some(line) => line?,
            None => return Err(LoadError::DimensionsLineMissing),
        };
        let (rows, cols) = Self::parse_dimensions(&dims)?;

        let mut grid = Grid::new(rows, cols)?;
        for row in 0..rows {
            let line = match lines.next() {
                Some(line) => line?,
                // Fill-forward: remaining rows stay empty.
                None => break,
            };
            for (col, token) in Self::cell_tokens(&line).take(cols as usize).enumerate() {
                grid.set(row, col as u8, Self::classify(token))?;
            }
        }

        Ok(grid)
    }

    /// Read a grid from in-memory text
    pub fn read_str(input: &str) -> LoadResult<Grid> {
        Self::read(input.as_bytes())
    }

    /// Parse the `rows<TAB>cols` dimensions line
    fn parse_dimensions(line: &str) -> LoadResult<(u8, u8)> {
        let mut fields = line.split('\t').filter(|f| !f.is_empty());

        let rows_field = fields.next().ok_or(LoadError::RowsNotFound)?;
        let rows: u8 = rows_field
            .trim()
            .parse()
            .ok()
            .filter(|r| (1..=MAX_ROWS).contains(r))
            .ok_or_else(|| LoadError::RowsOutOfRange(rows_field.to_string()))?;

        let cols_field = fields.next().ok_or(LoadError::ColsNotFound)?;
        let cols: u8 = cols_field
            .trim()
            .parse()
            .ok()
            .filter(|c| (1..=MAX_COLS).contains(c))
            .ok_or_else(|| LoadError::ColsOutOfRange(cols_field.to_string()))?;

        Ok((rows, cols))
    }

    /// Split one input line into cell tokens
    ///
    /// Tabs separate cells, and two consecutive tabs carry an explicit empty
    /// cell between them. A single tab at the very start or end of the line
    /// is only a separator: no cell is inferred on its outer side. In split
    /// terms that means dropping one empty leading and one empty trailing
    /// field - every other empty field is a real empty cell.
    fn cell_tokens(line: &str) -> impl Iterator<Item = &str> {
        let mut fields: Vec<&str> = line.split('\t').collect();
        if fields.last() == Some(&"") {
            fields.pop();
        }
        if fields.first() == Some(&"") {
            fields.remove(0);
        }
        fields.into_iter()
    }

    /// Classify a raw cell token by its first character
    fn classify(token: &str) -> Cell {
        match token.chars().next() {
            None => Cell::Empty,
            Some('\'') => Cell::Text(token[1..].to_string()),
            Some('=') => Cell::formula(&token[1..]),
            _ => match token.parse::<i32>() {
                Ok(value) => match Cell::number(value) {
                    Ok(cell) => cell,
                    Err(kind) => Cell::Error {
                        original: token.to_string(),
                        kind,
                    },
                },
                Err(_) => Cell::Error {
                    original: token.to_string(),
                    kind: CellError::InvalidExpression,
                },
            },
        }
    }
}
