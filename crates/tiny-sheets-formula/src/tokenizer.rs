//! Formula tokenizer
//!
//! Splits raw formula text (with the leading `=` already stripped) into
//! lexemes on arithmetic-operator boundaries.

use tiny_sheets_core::{CellError, Operation};

/// Split formula text into lexemes
///
/// Operators become single-character lexemes; the operand segments around
/// them are whitespace-trimmed. An operand segment that is empty after
/// trimming is still emitted, so the parser can report it as
/// [`CellError::EmptySubexpression`] - with one exception: nothing after a
/// final operator means the formula simply stopped there, and no empty
/// lexeme is invented for it (the parser reports the dangling operator
/// instead).
///
/// ```rust
/// use tiny_sheets_formula::tokenize;
///
/// assert_eq!(tokenize("A1 + 2").unwrap(), vec!["A1", "+", "2"]);
/// assert_eq!(tokenize("1+").unwrap(), vec!["1", "+"]);
/// ```
pub fn tokenize(expr: &str) -> Result<Vec<&str>, CellError> {
    if expr.is_empty() {
        return Err(CellError::EmptyExpression);
    }

    let mut lexemes = Vec::new();
    let mut start = 0;
    for (idx, ch) in expr.char_indices() {
        if Operation::from_symbol(ch).is_some() {
            lexemes.push(expr[start..idx].trim());
            lexemes.push(&expr[idx..idx + 1]);
            start = idx + 1;
        }
    }

    let tail = expr[start..].trim();
    if !tail.is_empty() || lexemes.is_empty() {
        lexemes.push(tail);
    }

    Ok(lexemes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_operand() {
        assert_eq!(tokenize("12").unwrap(), vec!["12"]);
        assert_eq!(tokenize("  B3 ").unwrap(), vec!["B3"]);
    }

    #[test]
    fn test_operators_split_and_survive() {
        assert_eq!(tokenize("1+2-3*4/5").unwrap(), vec![
            "1", "+", "2", "-", "3", "*", "4", "/", "5"
        ]);
    }

    #[test]
    fn test_whitespace_trimmed_from_operands() {
        assert_eq!(tokenize(" A1 +  2 ").unwrap(), vec!["A1", "+", "2"]);
    }

    #[test]
    fn test_empty_expression() {
        assert_eq!(tokenize(""), Err(CellError::EmptyExpression));
    }

    #[test]
    fn test_whitespace_only_yields_empty_lexeme() {
        assert_eq!(tokenize("   ").unwrap(), vec![""]);
    }

    #[test]
    fn test_doubled_operator_yields_empty_lexeme() {
        assert_eq!(tokenize("1++2").unwrap(), vec!["1", "+", "", "+", "2"]);
        assert_eq!(tokenize("1+ -2").unwrap(), vec!["1", "+", "", "-", "2"]);
    }

    #[test]
    fn test_leading_operator_yields_empty_lexeme() {
        assert_eq!(tokenize("+1").unwrap(), vec!["", "+", "1"]);
    }

    #[test]
    fn test_trailing_operator_emits_no_empty_lexeme() {
        assert_eq!(tokenize("1+").unwrap(), vec!["1", "+"]);
        assert_eq!(tokenize("1+ ").unwrap(), vec!["1", "+"]);
    }
}
