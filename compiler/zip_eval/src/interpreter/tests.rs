use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scoped_guard_pops_on_drop() {
    let mut env = Environment::new();
    let mut interpreter = Interpreter::new(&mut env);
    {
        let mut scoped = interpreter.scoped();
        assert_eq!(scoped.env.depth(), 2);
        scoped.nest();
        assert_eq!(scoped.env.depth(), 3);
    }
    assert_eq!(interpreter.env.depth(), 1);
}

#[test]
fn call_guard_tracks_depth() {
    let mut env = Environment::new();
    let mut interpreter = Interpreter::new(&mut env);
    {
        let scoped = interpreter.scoped_call();
        assert_eq!(scoped.call_depth, 1);
        assert_eq!(scoped.env.depth(), 2);
    }
    assert_eq!(interpreter.call_depth, 0);
    assert_eq!(interpreter.env.depth(), 1);
}

#[test]
fn call_scope_hides_enclosing_locals() {
    let mut env = Environment::new();
    env.define("global", Object::Number(1), Mutability::Immutable);
    let mut interpreter = Interpreter::new(&mut env);
    let mut block = interpreter.scoped();
    block.env.define("local", Object::Number(2), Mutability::Mutable);

    let call = block.scoped_call();
    assert_eq!(call.env.lookup("global"), Some(&Object::Number(1)));
    assert_eq!(call.env.lookup("local"), None);
}

#[test]
fn empty_program_runs_to_null() {
    let mut env = Environment::new();
    assert_eq!(Interpreter::new(&mut env).run(&Program::new()), NULL);
}

#[test]
fn with_max_call_depth_overrides_default() {
    let mut env = Environment::new();
    let interpreter = Interpreter::new(&mut env).with_max_call_depth(3);
    assert_eq!(interpreter.max_call_depth(), 3);
}
