//! Error types for tiny-sheets-core

use std::fmt;
use thiserror::Error;

use crate::{MAX_COLS, MAX_ROWS};

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or addressing a grid
///
/// These are API-misuse errors, distinct from the per-cell runtime kinds in
/// [`CellError`]: a bad grid shape or index is a caller bug, not cell content.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid dimensions outside the supported bounds
    #[error("invalid grid dimensions {rows}x{cols} (allowed: 1-{MAX_ROWS} rows, 1-{MAX_COLS} columns)")]
    InvalidDimensions { rows: u8, cols: u8 },

    /// Row index out of bounds
    #[error("row index {0} out of bounds (rows: {1})")]
    RowOutOfBounds(u8, u8),

    /// Column index out of bounds
    #[error("column index {0} out of bounds (columns: {1})")]
    ColumnOutOfBounds(u8, u8),
}

/// Runtime error kinds raised by cell evaluation
///
/// A cell-level error never aborts a run: it becomes the failing cell's
/// permanent result, and formulas referencing that cell re-raise the same
/// kind. Rendered output prefixes the stable token with `#`
/// (e.g. `#DivisionByZero`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellError {
    /// A number cell was constructed from a negative literal
    NegativeNumber,
    /// A formula referenced a cell outside the grid bounds
    DeadLink,
    /// An arithmetic result does not fit in a signed 32-bit integer
    OverflowError,
    /// Division by zero
    DivisionByZero,
    /// A formula used a text cell as a numeric operand
    TextInExpression,
    /// A formula with no text after the `=` marker
    EmptyExpression,
    /// A zero-length lexeme, e.g. from a doubled operator
    EmptySubexpression,
    /// A lexeme that is neither an operator, a number, nor a cell reference
    UnknownSubexpression,
    /// A formula ending in a dangling operator
    IncompleteSubexpression,
    /// A formula that (directly or transitively) references its own
    /// still-in-progress evaluation
    Cycle,
    /// A malformed expression or an unclassifiable input token
    InvalidExpression,
}

impl CellError {
    /// Get the stable display token for this error kind
    pub fn as_str(&self) -> &'static str {
        match self {
            CellError::NegativeNumber => "NegativeNumber",
            CellError::DeadLink => "DeadLink",
            CellError::OverflowError => "OverflowError",
            CellError::DivisionByZero => "DivisionByZero",
            CellError::TextInExpression => "TextInExpression",
            CellError::EmptyExpression => "EmptyExpression",
            CellError::EmptySubexpression => "EmptySubexpression",
            CellError::UnknownSubexpression => "UnknownSubexpression",
            CellError::IncompleteSubexpression => "IncompleteSubexpression",
            CellError::Cycle => "Cycle",
            CellError::InvalidExpression => "InvalidExpression",
        }
    }

    /// Parse a stable token back into an error kind
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "NegativeNumber" => Some(CellError::NegativeNumber),
            "DeadLink" => Some(CellError::DeadLink),
            "OverflowError" => Some(CellError::OverflowError),
            "DivisionByZero" => Some(CellError::DivisionByZero),
            "TextInExpression" => Some(CellError::TextInExpression),
            "EmptyExpression" => Some(CellError::EmptyExpression),
            "EmptySubexpression" => Some(CellError::EmptySubexpression),
            "UnknownSubexpression" => Some(CellError::UnknownSubexpression),
            "IncompleteSubexpression" => Some(CellError::IncompleteSubexpression),
            "Cycle" => Some(CellError::Cycle),
            "InvalidExpression" => Some(CellError::InvalidExpression),
            _ => None,
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
