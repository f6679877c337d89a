//! Declarations and reassignment.

use pretty_assertions::assert_eq;

use super::{assert_error, eval, eval_in};
use crate::{Environment, Object, NULL};

#[test]
fn bindings_evaluate_to_null() {
    assert_eq!(eval("x :: 1"), NULL);
    assert_eq!(eval("x := 1"), NULL);
    assert_eq!(eval("x := 1; x = 2"), NULL);
}

#[test]
fn constants_and_variables_resolve() {
    assert_eq!(eval("x :: 5; x"), Object::Number(5));
    assert_eq!(eval("x := 5; y :: x * 2; y"), Object::Number(10));
}

#[test]
fn variables_can_be_reassigned() {
    assert_eq!(eval("x := 1; x = x + 1; x"), Object::Number(2));
}

#[test]
fn prefix_results_are_stored_unwrapped() {
    assert_eq!(eval("x :: -5; x"), Object::Number(-5));
}

#[test]
fn constants_cannot_be_reassigned() {
    assert_error("x :: 1; x = 2", "cannot assign to constant: x");
}

#[test]
fn reassigning_an_unknown_name_fails() {
    assert_error("y = 2", "identifier not found: y");
}

#[test]
fn redeclaring_in_the_same_scope_fails() {
    assert_error("x :: 1; x :: 2", "identifier already declared: x");
    assert_error("x := 1; x :: 2", "identifier already declared: x");
}

#[test]
fn value_errors_prevent_the_binding() {
    let mut env = Environment::new();
    eval_in(&mut env, "x :: foo");
    assert_eq!(env.lookup("x"), None);
}

#[test]
fn bindings_persist_in_the_environment() {
    let mut env = Environment::new();
    assert_eq!(eval_in(&mut env, "x := 1"), NULL);
    assert_eq!(eval_in(&mut env, "x = x + 41"), NULL);
    assert_eq!(eval_in(&mut env, "x"), Object::Number(42));
}
