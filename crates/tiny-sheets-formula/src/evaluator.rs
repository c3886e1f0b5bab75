//! Lazy formula evaluation
//!
//! Values are computed on demand, the first time a cell is read. Formula
//! cells cache their outcome (value or error) permanently; a second read
//! never recomputes. Circular references are detected through the call
//! stack alone: a formula observed in its `InProgress` phase is being
//! re-entered by its own evaluation.

use crate::arith;
use crate::parser::parse_expression;
use tiny_sheets_core::{Cell, CellError, FormulaCell, FormulaState, Grid, SubExpr, Term};

/// Per-grid evaluation entry point
///
/// Borrows the grid read-only; all memoization lives inside the formula
/// cells themselves. Evaluation is single-threaded and recursive - the call
/// stack depth is bounded by the cell count, and every cell leaves its
/// `InProgress` phase exactly once, so evaluation always terminates.
pub struct Evaluator<'a> {
    grid: &'a Grid,
}

/// Read-only snapshot of a formula cell's phase
enum Probe {
    Done(Result<i32, CellError>),
    InProgress,
    Tokens(Vec<SubExpr>),
    Unparsed,
}

impl<'a> Evaluator<'a> {
    /// Create an evaluator over a loaded grid
    pub fn new(grid: &'a Grid) -> Self {
        Evaluator { grid }
    }

    /// The numeric value of a cell
    ///
    /// Empty cells count as `0`; text cells raise
    /// [`CellError::TextInExpression`]; positions outside the grid raise
    /// [`CellError::DeadLink`].
    pub fn int_value(&self, row: u8, col: u8) -> Result<i32, CellError> {
        match self.grid.cell(row, col).ok_or(CellError::DeadLink)? {
            Cell::Empty => Ok(0),
            Cell::Number(value) => Ok(*value),
            Cell::Text(_) => Err(CellError::TextInExpression),
            Cell::Formula(formula) => self.eval_formula(formula),
            Cell::Error { kind, .. } => Err(*kind),
        }
    }

    /// The display value of a cell
    ///
    /// Formula cells evaluate first and render their numeric result.
    pub fn string_value(&self, row: u8, col: u8) -> Result<String, CellError> {
        match self.grid.cell(row, col).ok_or(CellError::DeadLink)? {
            Cell::Empty => Ok(String::new()),
            Cell::Number(value) => Ok(value.to_string()),
            Cell::Text(text) => Ok(text.clone()),
            Cell::Formula(formula) => self.eval_formula(formula).map(|v| v.to_string()),
            Cell::Error { kind, .. } => Err(*kind),
        }
    }

    /// Drive one formula cell through its lifecycle
    ///
    /// Each phase transition is one-way and a captured error is permanent,
    /// so every path below either returns a cached outcome or moves the cell
    /// to a terminal phase before returning.
    fn eval_formula(&self, cell: &FormulaCell) -> Result<i32, CellError> {
        // Snapshot the phase under a read-only borrow, released before any
        // transition: the recursive evaluation below may probe this very
        // cell again, and a held borrow would turn a cycle into a panic.
        let probe = match &*cell.state() {
            FormulaState::Evaluated(value) => Probe::Done(Ok(*value)),
            FormulaState::Failed(kind) => Probe::Done(Err(*kind)),
            FormulaState::InProgress => Probe::InProgress,
            FormulaState::Parsed(seq) => Probe::Tokens(seq.clone()),
            FormulaState::Unparsed => Probe::Unparsed,
        };

        let seq = match probe {
            Probe::Done(outcome) => return outcome,
            Probe::InProgress => {
                // Re-entered while still evaluating: a circular reference.
                cell.set_state(FormulaState::Failed(CellError::Cycle));
                return Err(CellError::Cycle);
            }
            Probe::Tokens(seq) => seq,
            Probe::Unparsed => match parse_expression(cell.raw()) {
                Ok(seq) => {
                    cell.set_state(FormulaState::Parsed(seq.clone()));
                    seq
                }
                Err(kind) => {
                    cell.set_state(FormulaState::Failed(kind));
                    return Err(kind);
                }
            },
        };

        cell.set_state(FormulaState::InProgress);
        let outcome = self.eval_sequence(&seq);
        cell.set_state(match outcome {
            Ok(value) => FormulaState::Evaluated(value),
            Err(kind) => FormulaState::Failed(kind),
        });
        outcome
    }

    /// Fold a sub-expression sequence left-to-right
    ///
    /// No precedence: each operation applies immediately to the running
    /// accumulator and the next term, so `A+B*C` computes `(A+B)*C`.
    fn eval_sequence(&self, seq: &[SubExpr]) -> Result<i32, CellError> {
        let mut acc = 0;
        let mut pending = None;
        let mut expect_term = true;

        for sub in seq {
            if expect_term {
                let value = match sub {
                    SubExpr::Term(term) => self.term_value(term)?,
                    SubExpr::Operation(_) => return Err(CellError::InvalidExpression),
                };
                acc = match pending {
                    None => value,
                    Some(op) => arith::apply(op, acc, value)?,
                };
            } else {
                match sub {
                    SubExpr::Operation(op) => pending = Some(*op),
                    SubExpr::Term(_) => return Err(CellError::InvalidExpression),
                }
            }
            expect_term = !expect_term;
        }

        Ok(acc)
    }

    /// Resolve one term, recursing through the grid for cell references
    fn term_value(&self, term: &Term) -> Result<i32, CellError> {
        match term {
            Term::Number(value) => Ok(*value),
            Term::CellRef { row, col } => self.int_value(*row, *col),
        }
    }
}
