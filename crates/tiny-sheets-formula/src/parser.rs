//! Expression parser
//!
//! Classifies tokenizer lexemes into a flat [`SubExpr`] sequence. There is
//! no tree: evaluation later folds the sequence left-to-right.

use crate::tokenizer::tokenize;
use tiny_sheets_core::{CellError, Operation, SubExpr, Term};

/// Parse formula text (without the leading `=`) into a sub-expression
/// sequence
///
/// # Example
/// ```rust
/// use tiny_sheets_core::{CellError, Operation, SubExpr, Term};
/// use tiny_sheets_formula::parse_expression;
///
/// let seq = parse_expression("a1+12").unwrap();
/// assert_eq!(seq, vec![
///     SubExpr::Term(Term::CellRef { row: 0, col: 0 }),
///     SubExpr::Operation(Operation::Add),
///     SubExpr::Term(Term::Number(12)),
/// ]);
///
/// assert_eq!(parse_expression("1+"), Err(CellError::IncompleteSubexpression));
/// ```
pub fn parse_expression(expr: &str) -> Result<Vec<SubExpr>, CellError> {
    let lexemes = tokenize(expr)?;

    let mut seq = Vec::with_capacity(lexemes.len());
    for lexeme in lexemes {
        seq.push(classify(lexeme)?);
    }

    // A formula cannot end on a dangling operator.
    if matches!(seq.last(), Some(SubExpr::Operation(_))) {
        return Err(CellError::IncompleteSubexpression);
    }

    Ok(seq)
}

/// Classify a single lexeme
fn classify(lexeme: &str) -> Result<SubExpr, CellError> {
    if lexeme.is_empty() {
        return Err(CellError::EmptySubexpression);
    }

    let bytes = lexeme.as_bytes();

    if bytes.len() == 1 {
        if let Some(op) = Operation::from_symbol(bytes[0] as char) {
            return Ok(SubExpr::Operation(op));
        }
    }

    // Non-negative integer literal: decimal ASCII digits only. The tokenizer
    // splits on '+' and '-', so a sign can never reach this point.
    if bytes.iter().all(u8::is_ascii_digit) {
        return match lexeme.parse::<i32>() {
            Ok(value) => Ok(SubExpr::Term(Term::Number(value))),
            // All digits but too large for i32, and a digit can never open
            // a cell reference.
            Err(_) => Err(CellError::UnknownSubexpression),
        };
    }

    // Cell reference: one letter (column A-Z, case-insensitive) followed by
    // one digit 1-9 (row).
    if bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && (b'1'..=b'9').contains(&bytes[1]) {
        return Ok(SubExpr::Term(Term::CellRef {
            row: bytes[1] - b'1',
            col: bytes[0].to_ascii_uppercase() - b'A',
        }));
    }

    Err(CellError::UnknownSubexpression)
}
