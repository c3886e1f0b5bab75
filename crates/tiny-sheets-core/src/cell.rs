//! Cell variants and the formula evaluation lifecycle

use std::cell::{Ref, RefCell};

use crate::error::CellError;
use crate::expr::SubExpr;

/// One grid position's content
///
/// The variant set is closed: every operation over cells is an exhaustive
/// match, there is no open-ended dispatch.
#[derive(Debug, Clone, Default)]
pub enum Cell {
    /// No content; string value `""`, numeric value `0`
    #[default]
    Empty,

    /// Non-negative integer literal
    Number(i32),

    /// Arbitrary text; numeric access always fails with
    /// [`CellError::TextInExpression`]
    Text(String),

    /// A lazily parsed and evaluated expression
    Formula(FormulaCell),

    /// A cell that failed at load time; both accessors re-raise `kind`
    Error {
        /// The raw input token, kept for diagnostics
        original: String,
        /// The captured error kind
        kind: CellError,
    },
}

impl Cell {
    /// Create a number cell
    ///
    /// Negative literals are rejected at construction, not at evaluation.
    ///
    /// ```rust
    /// use tiny_sheets_core::{Cell, CellError};
    ///
    /// assert!(Cell::number(12).is_ok());
    /// assert_eq!(Cell::number(-5), Err(CellError::NegativeNumber));
    /// ```
    pub fn number(value: i32) -> Result<Self, CellError> {
        if value < 0 {
            return Err(CellError::NegativeNumber);
        }
        Ok(Cell::Number(value))
    }

    /// Create a formula cell from its raw expression text (without the
    /// leading `=` marker)
    pub fn formula<S: Into<String>>(raw: S) -> Self {
        Cell::Formula(FormulaCell::new(raw))
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the cell holds a formula
    pub fn is_formula(&self) -> bool {
        matches!(self, Cell::Formula(_))
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Empty, Cell::Empty) => true,
            (Cell::Number(a), Cell::Number(b)) => a == b,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Formula(a), Cell::Formula(b)) => a.raw() == b.raw(),
            (
                Cell::Error {
                    original: a,
                    kind: ka,
                },
                Cell::Error {
                    original: b,
                    kind: kb,
                },
            ) => a == b && ka == kb,
            _ => false,
        }
    }
}

/// A formula cell: raw expression text plus its evaluation lifecycle
///
/// The lifecycle state lives behind a `RefCell` because evaluation is
/// triggered through shared references to the owning grid. Evaluation is
/// strictly single-threaded and re-entrant only through the call stack, so
/// no borrow is ever held across a recursive step.
#[derive(Debug)]
pub struct FormulaCell {
    raw: String,
    state: RefCell<FormulaState>,
}

/// The four-phase lifecycle of a formula cell
///
/// Every transition is one-way:
/// `Unparsed` -> `Parsed` (or `Failed`) -> `InProgress` -> `Evaluated`
/// (or `Failed`). `Failed` and `Evaluated` are terminal; the captured
/// outcome is returned on every later access without recomputation.
/// `InProgress` doubles as the cycle sentinel: observing it on entry means
/// the call stack has looped back into a cell it is still evaluating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaState {
    /// Only the raw text exists
    Unparsed,
    /// Token sequence built once, cached thereafter
    Parsed(Vec<SubExpr>),
    /// Evaluation has started but not finished
    InProgress,
    /// Terminal: cached numeric result
    Evaluated(i32),
    /// Terminal: captured parse or evaluation error
    Failed(CellError),
}

impl FormulaCell {
    /// Create an unparsed formula cell
    pub fn new<S: Into<String>>(raw: S) -> Self {
        FormulaCell {
            raw: raw.into(),
            state: RefCell::new(FormulaState::Unparsed),
        }
    }

    /// The raw expression text, without the leading `=` marker
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Borrow the current lifecycle state
    ///
    /// The borrow must be released before recursing into another cell's
    /// evaluation, otherwise a self-referencing formula would panic instead
    /// of reporting [`CellError::Cycle`].
    pub fn state(&self) -> Ref<'_, FormulaState> {
        self.state.borrow()
    }

    /// Advance the lifecycle
    ///
    /// Transitions are expected to be one-way; the state machine driving
    /// them lives in the evaluator.
    pub fn set_state(&self, state: FormulaState) {
        *self.state.borrow_mut() = state;
    }

    /// The cached outcome, if evaluation already finished
    pub fn cached(&self) -> Option<Result<i32, CellError>> {
        match *self.state.borrow() {
            FormulaState::Evaluated(value) => Some(Ok(value)),
            FormulaState::Failed(kind) => Some(Err(kind)),
            _ => None,
        }
    }
}

impl Clone for FormulaCell {
    fn clone(&self) -> Self {
        FormulaCell {
            raw: self.raw.clone(),
            state: RefCell::new(self.state.borrow().clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_cell_rejects_negative() {
        assert_eq!(Cell::number(0), Ok(Cell::Number(0)));
        assert_eq!(Cell::number(i32::MAX), Ok(Cell::Number(i32::MAX)));
        assert_eq!(Cell::number(-1), Err(CellError::NegativeNumber));
    }

    #[test]
    fn test_formula_cell_starts_unparsed() {
        let cell = FormulaCell::new("A1+2");
        assert_eq!(cell.raw(), "A1+2");
        assert_eq!(*cell.state(), FormulaState::Unparsed);
        assert_eq!(cell.cached(), None);
    }

    #[test]
    fn test_formula_cell_cached_outcomes() {
        let cell = FormulaCell::new("1+1");
        cell.set_state(FormulaState::Evaluated(2));
        assert_eq!(cell.cached(), Some(Ok(2)));

        let cell = FormulaCell::new("1/0");
        cell.set_state(FormulaState::Failed(CellError::DivisionByZero));
        assert_eq!(cell.cached(), Some(Err(CellError::DivisionByZero)));
    }

    #[test]
    fn test_default_cell_is_empty() {
        assert!(Cell::default().is_empty());
    }
}
