//! Stable error codes for Zip diagnostics.
//!
//! Codes are searchable identifiers attached to every parse error. The
//! first digit names the phase that produced the problem:
//! - E0xxx: lexical (surfaced by the parser when it meets an `Illegal` token)
//! - E1xxx: syntactic

mod error_code;

pub use error_code::ErrorCode;
