//! # tiny-sheets-formula
//!
//! Formula parser and evaluator for tiny-sheets.
//!
//! This crate provides:
//! - Tokenizing (formula text -> lexemes split on operators)
//! - Parsing (lexemes -> flat [`SubExpr`](tiny_sheets_core::SubExpr) sequence)
//! - Checked 32-bit arithmetic
//! - Lazy, memoizing evaluation with call-stack cycle detection
//!
//! Formulas are deliberately small: integer terms and single-letter,
//! single-digit cell references combined left-to-right with no operator
//! precedence, so `=A1+B1*C1` means `(A1+B1)*C1`.
//!
//! ## Example
//!
//! ```rust
//! use tiny_sheets_core::{Cell, Grid};
//! use tiny_sheets_formula::Evaluator;
//!
//! let mut grid = Grid::new(1, 2).unwrap();
//! grid.set(0, 0, Cell::number(6).unwrap()).unwrap();
//! grid.set(0, 1, Cell::formula("A1*7")).unwrap();
//!
//! let eval = Evaluator::new(&grid);
//! assert_eq!(eval.int_value(0, 1), Ok(42));
//! ```

pub mod arith;
pub mod evaluator;
pub mod parser;
pub mod tokenizer;

pub use evaluator::Evaluator;
pub use parser::parse_expression;
pub use tokenizer::tokenize;
