//! Zip Eval - tree-walking evaluator for the Zip language.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `Environment`: scope arena with parent indices
//! - `evaluate_infix`: dispatch on operand variants, then operator text
//! - `evaluate_prefix`: `!` and unary `-`
//! - `Interpreter`: statement and expression evaluation, function calls
//! - `Object`: runtime values, with `TRUE`, `FALSE` and `NULL` as statics
//!
//! Failures are `EvalError`s inside the crate. Only [`evaluate`] and
//! [`Interpreter::run`] turn them into [`Object::Error`].

mod environment;
pub mod errors;
pub mod interpreter;
mod object;
mod operators;
mod unary_operators;

pub use environment::{AssignError, Environment, Mutability, ScopeId};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
pub use object::{FunctionObject, Object, FALSE, NULL, TRUE};
pub use operators::evaluate_infix;
pub use unary_operators::evaluate_prefix;

use zip_ir::Program;

/// Evaluate `program` against `env` with the default configuration.
///
/// Bindings made at the top level stay in `env` afterwards.
pub fn evaluate(program: &Program, env: &mut Environment) -> Object {
    Interpreter::new(env).run(program)
}

#[cfg(test)]
mod tests;
