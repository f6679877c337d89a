//! Function literal and call evaluation for the Interpreter.

use std::sync::Arc;

use zip_ir::FunctionLiteral;

use super::Interpreter;
use crate::errors::{call_depth_exceeded, not_callable, wrong_arg_count};
use crate::{EvalError, EvalResult, FunctionObject, Mutability, Object};

impl Interpreter<'_> {
    /// A function literal closes over a snapshot of every visible binding.
    pub(super) fn eval_function_literal(&mut self, literal: &FunctionLiteral) -> Object {
        let captures = self.env.capture();
        tracing::trace!(
            parameters = literal.parameters.len(),
            captures = captures.len(),
            "function literal"
        );
        Object::Function(Arc::new(FunctionObject {
            parameters: literal.parameters.clone(),
            body: literal.body.clone(),
            captures,
        }))
    }

    /// Evaluate a call of an already evaluated callee.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len(), depth = self.call_depth))]
    pub(super) fn eval_call(&mut self, callee: &Object, args: Vec<Object>) -> EvalResult {
        let Object::Function(function) = callee.peeled() else {
            return Err(not_callable(callee.peeled()));
        };
        check_arg_count(function, &args)?;
        self.check_call_depth()?;

        let function = Arc::clone(function);
        let mut scoped = self.scoped_call();
        bind_captures(&mut scoped, &function);
        scoped.nest();
        for (parameter, value) in function.parameters.iter().zip(args) {
            scoped
                .env
                .define(parameter.name.clone(), value, Mutability::Mutable);
        }

        match scoped.eval_block(&function.body)? {
            Object::ReturnValue(value) => Ok(*value),
            other => Ok(other),
        }
    }

    fn check_call_depth(&self) -> Result<(), EvalError> {
        if self.call_depth >= self.max_call_depth {
            return Err(call_depth_exceeded(self.max_call_depth));
        }
        Ok(())
    }
}

fn check_arg_count(function: &FunctionObject, args: &[Object]) -> Result<(), EvalError> {
    if function.parameters.len() != args.len() {
        return Err(wrong_arg_count(function.parameters.len(), args.len()));
    }
    Ok(())
}

/// Captured values are constants inside the body.
fn bind_captures(interpreter: &mut Interpreter<'_>, function: &FunctionObject) {
    for (name, value) in &function.captures {
        interpreter
            .env
            .define(name.clone(), value.clone(), Mutability::Immutable);
    }
}
