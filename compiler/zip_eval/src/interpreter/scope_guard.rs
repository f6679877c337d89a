//! RAII scope guards for the interpreter's environment.
//!
//! The guard holds `&mut Interpreter` and derefs to it, so code inside a
//! scope keeps calling interpreter methods as usual. Dropping the guard
//! pops every scope it pushed, including when an error returns early
//! through `?`.

use std::ops::{Deref, DerefMut};

use super::Interpreter;

/// Pops `scopes` environment scopes (and leaves one call frame, if it
/// entered one) when dropped.
pub(crate) struct ScopedInterpreter<'guard, 'env> {
    interpreter: &'guard mut Interpreter<'env>,
    scopes: usize,
    call_frame: bool,
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        for _ in 0..self.scopes {
            self.interpreter.env.pop_scope();
        }
        if self.call_frame {
            self.interpreter.call_depth -= 1;
        }
    }
}

impl<'env> Deref for ScopedInterpreter<'_, 'env> {
    type Target = Interpreter<'env>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'env> Interpreter<'env> {
    /// Enter a block scope nested in the current one.
    pub(crate) fn scoped(&mut self) -> ScopedInterpreter<'_, 'env> {
        self.env.push_scope();
        ScopedInterpreter {
            interpreter: self,
            scopes: 1,
            call_frame: false,
        }
    }

    /// Enter a function call: one call frame plus a capture scope (child of
    /// the global scope) and a body scope nested inside it.
    ///
    /// The caller checks the depth limit first.
    pub(crate) fn scoped_call(&mut self) -> ScopedInterpreter<'_, 'env> {
        self.call_depth += 1;
        self.env.push_function_scope();
        ScopedInterpreter {
            interpreter: self,
            scopes: 1,
            call_frame: true,
        }
    }
}

impl ScopedInterpreter<'_, '_> {
    /// Push one more scope, popped together with the others.
    pub(crate) fn nest(&mut self) {
        self.interpreter.env.push_scope();
        self.scopes += 1;
    }
}
