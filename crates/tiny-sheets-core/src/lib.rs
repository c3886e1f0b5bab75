//! # tiny-sheets-core
//!
//! Core data structures for the tiny-sheets spreadsheet evaluator.
//!
//! This crate provides the fundamental types used throughout tiny-sheets:
//! - [`Cell`] - The five cell variants (empty, number, text, formula, error)
//! - [`FormulaCell`] - A formula with its lazy evaluation lifecycle
//! - [`SubExpr`] - One element of a parsed formula (term or operation)
//! - [`Grid`] - The fixed-size cell store
//! - [`CellError`] - The runtime error kinds a cell evaluation can raise
//!
//! ## Example
//!
//! ```rust
//! use tiny_sheets_core::{Cell, Grid};
//!
//! let mut grid = Grid::new(2, 2).unwrap();
//! grid.set(0, 0, Cell::number(42).unwrap()).unwrap();
//! grid.set(0, 1, Cell::Text("hello".into())).unwrap();
//!
//! assert!(matches!(grid.cell(1, 1), Some(Cell::Empty)));
//! assert!(grid.cell(2, 0).is_none());
//! ```

pub mod cell;
pub mod error;
pub mod expr;
pub mod grid;

// Re-exports for convenience
pub use cell::{Cell, FormulaCell, FormulaState};
pub use error::{CellError, Error, Result};
pub use expr::{Operation, SubExpr, Term};
pub use grid::Grid;

/// Maximum number of rows in a grid
///
/// A cell reference is a single letter followed by a single digit 1-9, so no
/// more than 9 rows are addressable.
pub const MAX_ROWS: u8 = 9;

/// Maximum number of columns in a grid (A-Z)
pub const MAX_COLS: u8 = 26;
