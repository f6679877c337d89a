//! Zip IR - tokens and syntax tree
//!
//! This crate holds the data shared by every later stage:
//! - `Token` and `TokenKind` for lexer output
//! - AST nodes (`Program`, `Statement`, `Expression`)
//! - `DebugTree`, the structural dump used by tests and diagnostics
//!
//! Nodes own their children through `Box` and `Vec`. A parsed `Program`
//! is immutable; the evaluator only borrows it.

pub mod ast;
pub mod debug;
mod token;

pub use ast::{
    BindingKind, BindingStatement, BlockStatement, BooleanLiteral, CallExpression, Expression,
    ExpressionStatement, FunctionLiteral, Identifier, InfixExpression, InvalidExpression, Node,
    NumberLiteral, PrefixExpression, Program, ReturnStatement, Statement, StringLiteral,
};
pub use debug::{normalize_dump, DebugRender, DebugTree};
pub use token::{lookup_identifier, Token, TokenKind};
