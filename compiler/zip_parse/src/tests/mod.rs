//! Parser tests.
//!
//! - `parser`: statements, literals, precedence and associativity
//! - `errors`: recorded errors and recovery
