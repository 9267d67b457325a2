//! Binary operator evaluation.
//!
//! Direct enum-based dispatch over the closed `BinaryOp` set. Arithmetic is
//! checked: overflow and division by zero are runtime errors, never wrapping
//! or panicking. Comparisons yield `1` for true and `0` for false.

use imp_ir::BinaryOp;

use crate::errors::{division_by_zero, integer_overflow, unknown_operator};
use crate::EvalResult;

/// Evaluate a binary operation on two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: i64, right: i64) -> EvalResult {
    match op {
        BinaryOp::Add => left
            .checked_add(right)
            .ok_or_else(|| integer_overflow("addition")),
        BinaryOp::Sub => left
            .checked_sub(right)
            .ok_or_else(|| integer_overflow("subtraction")),
        BinaryOp::Mul => left
            .checked_mul(right)
            .ok_or_else(|| integer_overflow("multiplication")),
        BinaryOp::Div => {
            if right == 0 {
                return Err(division_by_zero());
            }
            // Only `i64::MIN / -1` remains.
            left.checked_div(right)
                .ok_or_else(|| integer_overflow("division"))
        }
        BinaryOp::Lt => Ok(truth(left < right)),
        BinaryOp::Gt => Ok(truth(left > right)),
        BinaryOp::LtEq => Ok(truth(left <= right)),
        BinaryOp::GtEq => Ok(truth(left >= right)),
        BinaryOp::Eq => Ok(truth(left == right)),
        BinaryOp::NotEq => Ok(truth(left != right)),
    }
}

/// Evaluate an operator given by its source symbol (`"+"`, `"<="`, ...).
///
/// For callers that hold a raw symbol rather than a `BinaryOp`; anything
/// outside the supported set is `UnknownOperator`.
pub fn evaluate_binary_symbol(symbol: &str, left: i64, right: i64) -> EvalResult {
    let op = BinaryOp::from_symbol(symbol).ok_or_else(|| unknown_operator(symbol))?;
    evaluate_binary(op, left, right)
}

#[inline]
fn truth(b: bool) -> i64 {
    i64::from(b)
}
