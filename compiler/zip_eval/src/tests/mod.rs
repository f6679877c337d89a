//! Evaluator tests driven by parsed source.

mod binding_tests;

use std::sync::Once;

use crate::{evaluate, Environment, Object};

static TRACING_INIT: Once = Once::new();

/// Install a test subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_test_writer())
                .with(EnvFilter::from_default_env())
                .try_init();
        }
    });
}

/// Parse `source` (which must be free of parse errors) and evaluate it in
/// `env`.
fn eval_in(env: &mut Environment, source: &str) -> Object {
    init_tracing();
    let output = zip_parse::parse(source);
    assert!(
        !output.has_errors(),
        "unexpected parse errors in {source:?}: {:?}",
        output.errors
    );
    evaluate(&output.program, env)
}

fn eval(source: &str) -> Object {
    eval_in(&mut Environment::new(), source)
}

#[track_caller]
fn assert_error(source: &str, expected: &str) {
    match eval(source) {
        Object::Error(message) => assert_eq!(message, expected, "source: {source}"),
        other => panic!("expected error for {source:?}, got {other:?}"),
    }
}
