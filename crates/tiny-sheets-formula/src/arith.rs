//! Checked 32-bit arithmetic
//!
//! Operands and results are signed 32-bit integers. Each operation computes
//! through a 64-bit intermediate and range-checks the exact result back into
//! `i32`, so the check itself can never overflow.

use tiny_sheets_core::{CellError, Operation};

/// Apply a binary operation to two operands
///
/// Division checks for a zero divisor first ([`CellError::DivisionByZero`]
/// takes precedence over the range check) and truncates toward zero;
/// `i32::MIN / -1` is the one quotient that overflows.
pub fn apply(op: Operation, left: i32, right: i32) -> Result<i32, CellError> {
    let wide = match op {
        Operation::Add => left as i64 + right as i64,
        Operation::Subtract => left as i64 - right as i64,
        Operation::Multiply => left as i64 * right as i64,
        Operation::Divide => {
            if right == 0 {
                return Err(CellError::DivisionByZero);
            }
            left as i64 / right as i64
        }
    };

    i32::try_from(wide).map_err(|_| CellError::OverflowError)
}
