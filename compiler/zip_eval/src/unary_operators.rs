//! Prefix operator implementations for the evaluator.
//!
//! The operand is looked at through any `Prefix` wrappers, so `!!x` sees
//! the truthiness of `x` itself. The caller wraps the result.

use crate::errors::{integer_overflow, unknown_prefix_operator};
use crate::{EvalResult, Object};

/// Apply the prefix `operator` to an already evaluated operand.
pub fn evaluate_prefix(operator: &str, right: &Object) -> EvalResult {
    match (operator, right.peeled()) {
        ("!", operand) => Ok(Object::from_bool(!operand.is_truthy())),
        ("-", Object::Number(n)) => n
            .checked_neg()
            .map(Object::Number)
            .ok_or_else(|| integer_overflow("negation")),
        (_, operand) => Err(unknown_prefix_operator(operator, operand)),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use crate::{FALSE, NULL, TRUE};

    mod bang {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn negates_booleans() {
            assert_eq!(evaluate_prefix("!", &TRUE).unwrap(), FALSE);
            assert_eq!(evaluate_prefix("!", &FALSE).unwrap(), TRUE);
        }

        #[test]
        fn null_is_falsy() {
            assert_eq!(evaluate_prefix("!", &NULL).unwrap(), TRUE);
        }

        #[test]
        fn other_values_are_truthy() {
            assert_eq!(evaluate_prefix("!", &Object::Number(0)).unwrap(), FALSE);
            assert_eq!(
                evaluate_prefix("!", &Object::String(String::new())).unwrap(),
                FALSE
            );
        }

        #[test]
        fn sees_through_prefix_wrapper() {
            let wrapped = Object::Prefix(Box::new(FALSE.clone()));
            assert_eq!(evaluate_prefix("!", &wrapped).unwrap(), TRUE);
        }
    }

    mod minus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn negates_numbers() {
            assert_eq!(
                evaluate_prefix("-", &Object::Number(5)).unwrap(),
                Object::Number(-5)
            );
            assert_eq!(
                evaluate_prefix("-", &Object::Prefix(Box::new(Object::Number(-5)))).unwrap(),
                Object::Number(5)
            );
        }

        #[test]
        fn rejects_non_numbers() {
            let error = evaluate_prefix("-", &TRUE).unwrap_err();
            assert_eq!(error.message, "unknown operator: -BOOLEAN");
        }

        #[test]
        fn min_value_overflows() {
            let error = evaluate_prefix("-", &Object::Number(i64::MIN)).unwrap_err();
            assert_eq!(error.message, "integer overflow in negation");
        }
    }
}
