//! End-to-end tests for grid loading, evaluation, and printing

use pretty_assertions::assert_eq;
use tiny_sheets::prelude::*;

fn render(input: &str) -> String {
    let grid = TsvReader::read_str(input).unwrap();
    TsvWriter::to_string(&grid)
}

/// The worked example the original task ships with: a 4x4 grid mixing
/// numbers, text, formula chains, an unclassifiable token, and a short row.
#[test]
fn test_worked_example() {
    let input = "4\t4\n\
                 12\t=C2\t3\t'Sample\n\
                 =A1+B1*C1/5\t=A2*B1\t=B3-C3\t'Spread\n\
                 'Test\t=4-3\t5\t'Sheet\n\
                 =B2\t=a4\t>asd23";

    let expected = "12\t-4\t3\tSample\n\
                    4\t-16\t-4\tSpread\n\
                    Test\t1\t5\tSheet\n\
                    -16\t-16\t#InvalidExpression\t\n";

    assert_eq!(render(input), expected);
}

#[test]
fn test_left_to_right_no_precedence() {
    // (2+3)*4 = 20, not 2+(3*4) = 14
    assert_eq!(render("1\t4\n2\t3\t4\t=A1+B1*C1\n"), "2\t3\t4\t20\n");
}

#[test]
fn test_division_by_zero_and_overflow() {
    assert_eq!(
        render("1\t2\n=5/0\t=2147483647+1\n"),
        "#DivisionByZero\t#OverflowError\n"
    );
}

#[test]
fn test_direct_cycle() {
    assert_eq!(render("1\t1\n=A1\n"), "#Cycle\n");
}

#[test]
fn test_two_cell_cycle_raises_at_both() {
    assert_eq!(render("1\t2\n=B1\t=A1\n"), "#Cycle\t#Cycle\n");
}

#[test]
fn test_negative_number_literal() {
    assert_eq!(render("1\t1\n-5\n"), "#NegativeNumber\n");
}

#[test]
fn test_dead_link() {
    assert_eq!(render("2\t2\n=C1\t=A9\n"), "#DeadLink\t#DeadLink\n\t\n");
}

#[test]
fn test_text_in_expression() {
    assert_eq!(render("1\t2\n'words\t=A1+1\n"), "words\t#TextInExpression\n");
}

#[test]
fn test_error_kinds_propagate_to_dependents() {
    // The root cause is visible at every dependent cell as its own error
    assert_eq!(
        render("1\t3\n=1/0\t=A1\t=B1+5\n"),
        "#DivisionByZero\t#DivisionByZero\t#DivisionByZero\n"
    );
}

#[test]
fn test_malformed_formulas() {
    assert_eq!(
        render("2\t2\n=\t=1+\n=1++2\t=x11\n"),
        "#EmptyExpression\t#IncompleteSubexpression\n\
         #EmptySubexpression\t#UnknownSubexpression\n"
    );
}

#[test]
fn test_empty_cells_read_as_zero() {
    // B1 is empty: 7+0
    assert_eq!(render("1\t3\n7\t\t=A1+B1\n"), "7\t\t7\n");
}

#[test]
fn test_missing_rows_fill_empty() {
    assert_eq!(render("3\t2\n1\t2\n"), "1\t2\n\t\n\t\n");
}

#[test]
fn test_load_errors_are_fatal() {
    assert!(matches!(
        TsvReader::read_str("10\t4\n"),
        Err(LoadError::RowsOutOfRange(_))
    ));
    assert!(matches!(
        TsvReader::read_str("4\t0\n"),
        Err(LoadError::ColsOutOfRange(_))
    ));
    assert!(matches!(
        TsvReader::read_str(""),
        Err(LoadError::DimensionsLineMissing)
    ));
}

#[test]
fn test_round_trip_non_formula_cells() {
    // Text keeps its content minus the leading marker, numbers re-render as
    // canonical decimal, empties stay empty
    assert_eq!(
        render("2\t3\n'Sample\t007\t0\n'  padded\t2147483647\n"),
        "Sample\t7\t0\n  padded\t2147483647\t\n"
    );
}

#[test]
fn test_formula_whitespace_is_insignificant() {
    assert_eq!(render("1\t3\n2\t3\t= A1 + B1 \n"), "2\t3\t5\n");
}

#[test]
fn test_evaluate_pipeline() {
    let mut output = Vec::new();
    tiny_sheets::evaluate("1\t2\n=B1+1\t41\n".as_bytes(), &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "42\t41\n");
}

#[test]
fn test_printing_is_idempotent() {
    // Memoized evaluation: rendering twice yields identical output,
    // including captured errors
    let grid = TsvReader::read_str("2\t2\n=A2\t=5/0\n=B2\t=A1\n").unwrap();
    let first = TsvWriter::to_string(&grid);
    let second = TsvWriter::to_string(&grid);
    assert_eq!(first, second);
    assert_eq!(first, "#Cycle\t#DivisionByZero\n#Cycle\t#Cycle\n");
}
