//! # tiny-sheets
//!
//! A tiny write-once spreadsheet evaluator.
//!
//! Grids arrive as tab-separated text: a dimensions line, then rows of
//! cells that may hold numbers, `'`-prefixed text, or `=`-prefixed formulas
//! referencing other cells (`A1`..`Z9`). Formulas are integer-only,
//! overflow-checked, and evaluated strictly left-to-right with no operator
//! precedence. Evaluation is lazy and memoized; circular references are
//! caught through the evaluation call stack and render as `#Cycle`.
//!
//! ## Example
//!
//! ```rust
//! use tiny_sheets::prelude::*;
//!
//! let grid = TsvReader::read_str("1\t3\n3\t4\t=A1+B1*A1\n").unwrap();
//! // Left-to-right: (3+4)*3
//! assert_eq!(TsvWriter::to_string(&grid), "3\t4\t21\n");
//! ```

pub mod pipeline;
pub mod prelude;

pub use pipeline::{evaluate, Error, Result};

// Re-export core types
pub use tiny_sheets_core::{
    Cell, CellError, FormulaCell, FormulaState, Grid, Operation, SubExpr, Term, MAX_COLS, MAX_ROWS,
};

// Re-export the evaluation and parsing entry points
pub use tiny_sheets_formula::{parse_expression, tokenize, Evaluator};

// Re-export the TSV surface
pub use tiny_sheets_tsv::{LoadError, LoadResult, TsvReader, TsvWriter};
