//! Grammar rules, as methods on [`Parser`](crate::Parser).
//!
//! - `statement.rs`: statement dispatch, bindings, returns, blocks
//! - `expr.rs`: precedence climbing and the prefix/infix rules

mod expr;
mod statement;
