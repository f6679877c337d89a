//! Infix operator implementations for the evaluator.
//!
//! Dispatch is on the pair of operand variants first, then on the operator
//! text. Operands are looked at through any `Prefix` wrappers.

use crate::errors::{division_by_zero, integer_overflow, type_mismatch, unknown_infix_operator};
use crate::{EvalResult, Object};

/// Apply the infix `operator` to two already evaluated operands.
pub fn evaluate_infix(operator: &str, left: &Object, right: &Object) -> EvalResult {
    let (left, right) = (left.peeled(), right.peeled());
    match (left, right) {
        (Object::Number(a), Object::Number(b)) => eval_number_infix(operator, *a, *b)
            .unwrap_or_else(|| Err(unknown_infix_operator(left, operator, right))),
        (Object::String(a), Object::String(b)) => match operator {
            "+" => Ok(Object::String(format!("{a}{b}"))),
            "==" => Ok(Object::from_bool(a == b)),
            "!=" => Ok(Object::from_bool(a != b)),
            _ => Err(unknown_infix_operator(left, operator, right)),
        },
        (Object::Boolean(a), Object::Boolean(b)) => eval_equality(operator, a == b)
            .ok_or_else(|| unknown_infix_operator(left, operator, right)),
        (Object::Null, Object::Null) => {
            eval_equality(operator, true).ok_or_else(|| unknown_infix_operator(left, operator, right))
        }
        _ if left.type_name() != right.type_name() => Err(type_mismatch(left, operator, right)),
        _ => Err(unknown_infix_operator(left, operator, right)),
    }
}

/// Integer arithmetic and comparison. `None` for operators numbers do not
/// support.
fn eval_number_infix(operator: &str, a: i64, b: i64) -> Option<EvalResult> {
    let result = match operator {
        "+" => a
            .checked_add(b)
            .map(Object::Number)
            .ok_or_else(|| integer_overflow("addition")),
        "-" => a
            .checked_sub(b)
            .map(Object::Number)
            .ok_or_else(|| integer_overflow("subtraction")),
        "*" => a
            .checked_mul(b)
            .map(Object::Number)
            .ok_or_else(|| integer_overflow("multiplication")),
        "/" if b == 0 => Err(division_by_zero()),
        "/" => a
            .checked_div(b)
            .map(Object::Number)
            .ok_or_else(|| integer_overflow("division")),
        "<" => Ok(Object::from_bool(a < b)),
        ">" => Ok(Object::from_bool(a > b)),
        "==" => Ok(Object::from_bool(a == b)),
        "!=" => Ok(Object::from_bool(a != b)),
        _ => return None,
    };
    Some(result)
}

/// `==` and `!=` given whether the operands are equal.
fn eval_equality(operator: &str, equal: bool) -> Option<Object> {
    match operator {
        "==" => Some(Object::from_bool(equal)),
        "!=" => Some(Object::from_bool(!equal)),
        _ => None,
    }
}
