//! Evaluation errors.
//!
//! `EvalErrorKind` carries the structured data of each failure. The factory
//! functions below are the public way to build an [`EvalError`]; they fill
//! in both the kind and the rendered message.

use std::fmt;

use crate::Object;

/// Result of one evaluation step.
pub type EvalResult = Result<Object, EvalError>;

/// Typed error category. `Display` is the user-facing message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    // Names
    #[error("identifier not found: {name}")]
    UndefinedIdentifier { name: String },
    #[error("identifier already declared: {name}")]
    AlreadyDeclared { name: String },
    #[error("cannot assign to constant: {name}")]
    ImmutableBinding { name: String },
    #[error("cannot reassign {name} from an enclosing scope")]
    EnclosingBinding { name: String },

    // Operators
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        operator: String,
        operand: &'static str,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        left: &'static str,
        operator: String,
        right: &'static str,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: &'static str,
        operator: String,
        right: &'static str,
    },

    // Arithmetic
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },

    // Functions
    #[error("not a function: {type_name}")]
    NotCallable { type_name: &'static str },
    #[error("wrong number of arguments: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },
    #[error("maximum call depth of {depth} exceeded")]
    CallDepthExceeded { depth: usize },

    #[error("object of type {node} not supported")]
    Unsupported { node: &'static str },
}

/// An evaluation failure. Never catchable from inside the language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::new(kind)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Factories

#[cold]
pub fn undefined_identifier(name: &str) -> EvalError {
    EvalErrorKind::UndefinedIdentifier {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn already_declared(name: &str) -> EvalError {
    EvalErrorKind::AlreadyDeclared {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn immutable_binding(name: &str) -> EvalError {
    EvalErrorKind::ImmutableBinding {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn enclosing_binding(name: &str) -> EvalError {
    EvalErrorKind::EnclosingBinding {
        name: name.to_string(),
    }
    .into()
}

#[cold]
pub fn unknown_prefix_operator(operator: &str, operand: &Object) -> EvalError {
    EvalErrorKind::UnknownPrefixOperator {
        operator: operator.to_string(),
        operand: operand.type_name(),
    }
    .into()
}

#[cold]
pub fn unknown_infix_operator(left: &Object, operator: &str, right: &Object) -> EvalError {
    EvalErrorKind::UnknownInfixOperator {
        left: left.type_name(),
        operator: operator.to_string(),
        right: right.type_name(),
    }
    .into()
}

#[cold]
pub fn type_mismatch(left: &Object, operator: &str, right: &Object) -> EvalError {
    EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        operator: operator.to_string(),
        right: right.type_name(),
    }
    .into()
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalErrorKind::DivisionByZero.into()
}

#[cold]
pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalErrorKind::IntegerOverflow { operation }.into()
}

#[cold]
pub fn not_callable(callee: &Object) -> EvalError {
    EvalErrorKind::NotCallable {
        type_name: callee.type_name(),
    }
    .into()
}

#[cold]
pub fn wrong_arg_count(expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.into()
}

#[cold]
pub fn call_depth_exceeded(depth: usize) -> EvalError {
    EvalErrorKind::CallDepthExceeded { depth }.into()
}

#[cold]
pub fn unsupported(node: &'static str) -> EvalError {
    EvalErrorKind::Unsupported { node }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn message_matches_kind_display() {
        let error = undefined_identifier("foo");
        assert_eq!(error.message, "identifier not found: foo");
        assert_eq!(error.to_string(), error.kind.to_string());
    }

    #[test]
    fn operator_messages() {
        assert_eq!(
            unknown_prefix_operator("-", &Object::Boolean(true)).message,
            "unknown operator: -BOOLEAN"
        );
        assert_eq!(
            type_mismatch(&Object::Number(1), "+", &Object::Boolean(true)).message,
            "type mismatch: NUMBER + BOOLEAN"
        );
        assert_eq!(
            unknown_infix_operator(&Object::Number(1), "%", &Object::Number(2)).message,
            "unknown operator: NUMBER % NUMBER"
        );
    }

    #[test]
    fn function_messages() {
        assert_eq!(
            wrong_arg_count(2, 1).message,
            "wrong number of arguments: expected 2, got 1"
        );
        assert_eq!(not_callable(&Object::Null).message, "not a function: NULL");
        assert_eq!(
            call_depth_exceeded(8).message,
            "maximum call depth of 8 exceeded"
        );
    }

    #[test]
    fn unsupported_names_the_node() {
        assert_eq!(
            unsupported("Invalid").message,
            "object of type Invalid not supported"
        );
    }
}
