//! Parsed formula elements
//!
//! A formula is a flat sequence of [`SubExpr`] values, alternating terms and
//! operations, evaluated strictly left-to-right with no precedence.

/// One element of a parsed formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubExpr {
    /// An operand: a literal or a cell reference
    Term(Term),
    /// A binary arithmetic operator
    Operation(Operation),
}

/// An operand in an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    /// Non-negative integer literal
    Number(i32),
    /// Reference to another cell, 0-based indices
    CellRef { row: u8, col: u8 },
}

/// A binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The single-character spelling used in formulas
    pub fn symbol(&self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
        }
    }

    /// Look up the operator for a formula character, if any
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            _ => None,
        }
    }
}
