//! Tree-walking interpreter for Zip.
//!
//! # Architecture
//!
//! Every evaluation step returns an [`EvalResult`]. A failure short-circuits
//! through `?` all the way to [`Interpreter::run`], which is the only place
//! an [`EvalError`] becomes an [`Object::Error`].
//!
//! `return` travels as [`Object::ReturnValue`]. Blocks stop at the first one
//! and hand it up untouched; the program level and the call boundary
//! (`function_call.rs`) unwrap it.
//!
//! Scopes entered during evaluation are owned by guards from
//! `scope_guard.rs`, so an early error never leaves a scope behind.

mod function_call;
mod scope_guard;

use zip_ir::{
    BindingKind, BindingStatement, BlockStatement, CallExpression, Expression, Program,
    Statement,
};

use crate::errors::{
    already_declared, enclosing_binding, immutable_binding, undefined_identifier, unsupported,
};
use crate::{
    evaluate_infix, evaluate_prefix, AssignError, Environment, EvalError, EvalResult,
    Mutability, Object, NULL,
};

/// Call depth allowed unless configured otherwise.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1024;

/// Evaluates programs against a borrowed environment.
///
/// The environment outlives the interpreter, so bindings made by one run are
/// visible to the next.
pub struct Interpreter<'env> {
    env: &'env mut Environment,
    max_call_depth: usize,
    call_depth: usize,
}

impl<'env> Interpreter<'env> {
    pub fn new(env: &'env mut Environment) -> Self {
        Interpreter {
            env,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            call_depth: 0,
        }
    }

    /// Limit how many calls may be active at once.
    #[must_use]
    pub fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    pub fn max_call_depth(&self) -> usize {
        self.max_call_depth
    }

    /// Evaluate `program`, turning a failure into an [`Object::Error`].
    pub fn run(&mut self, program: &Program) -> Object {
        match self.eval_program(program) {
            Ok(object) => object,
            Err(error) => {
                tracing::debug!(%error, "evaluation failed");
                Object::Error(error.message)
            }
        }
    }

    /// Statements in order. The value of the last one is the result; an
    /// empty program is null.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        let mut result = NULL.clone();
        for statement in &program.statements {
            result = match self.eval_statement(statement)? {
                Object::ReturnValue(value) => return Ok(*value),
                other => other,
            };
        }
        Ok(result)
    }

    fn eval_statement(&mut self, statement: &Statement) -> EvalResult {
        match statement {
            Statement::Expression(statement) => self.eval_expression(&statement.expression),
            Statement::Return(statement) => {
                let value = self.eval_expression(&statement.value)?;
                Ok(Object::ReturnValue(Box::new(value)))
            }
            Statement::Binding(binding) => self.eval_binding(binding),
            Statement::Block(block) => self.scoped().eval_block(block),
        }
    }

    /// Evaluate the statements of `block` in the current scope. A
    /// `ReturnValue` stops the block and is passed up still wrapped.
    fn eval_block(&mut self, block: &BlockStatement) -> EvalResult {
        let mut result = NULL.clone();
        for statement in &block.statements {
            result = self.eval_statement(statement)?;
            if matches!(result, Object::ReturnValue(_)) {
                break;
            }
        }
        Ok(result)
    }

    fn eval_binding(&mut self, binding: &BindingStatement) -> EvalResult {
        let name = binding.name.as_str();
        let value = self.eval_expression(&binding.value)?.into_peeled();
        tracing::debug!(name, kind = binding.kind.as_str(), value = %value, "binding");

        let mutability = match binding.kind {
            BindingKind::DeclareConst => Mutability::Immutable,
            BindingKind::DeclareVar => Mutability::Mutable,
            BindingKind::Reassign => {
                self.env.assign(name, value).map_err(|error| match error {
                    AssignError::Undefined => undefined_identifier(name),
                    AssignError::Immutable => immutable_binding(name),
                    AssignError::Enclosing => enclosing_binding(name),
                })?;
                return Ok(NULL.clone());
            }
        };

        if self.env.declared_here(name) {
            return Err(already_declared(name));
        }
        self.env.define(name, value, mutability);
        Ok(NULL.clone())
    }

    /// Evaluate one expression. Recursion depth follows the tree, so the
    /// stack is grown on demand.
    pub fn eval_expression(&mut self, expression: &Expression) -> EvalResult {
        zip_stack::ensure_sufficient_stack(|| self.eval_expression_inner(expression))
    }

    fn eval_expression_inner(&mut self, expression: &Expression) -> EvalResult {
        match expression {
            Expression::Number(literal) => Ok(Object::Number(literal.value)),
            Expression::String(literal) => Ok(Object::String(literal.value.clone())),
            Expression::Boolean(literal) => Ok(Object::from_bool(literal.value)),
            Expression::Identifier(identifier) => self
                .env
                .lookup(&identifier.name)
                .cloned()
                .ok_or_else(|| undefined_identifier(&identifier.name)),
            Expression::Prefix(prefix) => {
                let right = self.eval_expression(&prefix.right)?;
                let value = evaluate_prefix(&prefix.operator.text, &right)?;
                Ok(Object::Prefix(Box::new(value)))
            }
            Expression::Infix(infix) => {
                let left = self.eval_expression(&infix.left)?;
                let right = self.eval_expression(&infix.right)?;
                evaluate_infix(&infix.operator.text, &left, &right)
            }
            Expression::Function(literal) => Ok(self.eval_function_literal(literal)),
            Expression::Call(call) => self.eval_call_expression(call),
            Expression::Invalid(_) => Err(unsupported("Invalid")),
        }
    }

    /// Callee first, then arguments left to right.
    fn eval_call_expression(&mut self, call: &CallExpression) -> EvalResult {
        let callee = self.eval_expression(&call.function)?;
        let arguments = call
            .arguments
            .iter()
            .map(|argument| self.eval_expression(argument))
            .collect::<Result<Vec<_>, EvalError>>()?;
        self.eval_call(&callee, arguments)
    }
}

#[cfg(test)]
mod tests;
