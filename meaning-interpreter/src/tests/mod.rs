//! Acceptance tests for the evaluator.
//!
//! These build programs through the IR builder API and run them against a
//! captured output channel, asserting on emitted lines and failure modes.

use crate::Evaluator;
use crate::error::Result;
use meaning_ir::{ENTRY_POINT, FunctionDefinition, Node, Program};

mod test_acceptance_function_calls;

/// Wrap a body into a program whose only function is `main`.
pub(crate) fn main_only(body: Node) -> Program {
    Program::new(vec![FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        body,
    )])
}

/// Run a program with a captured output channel.
pub(crate) fn run_program_capturing(program: Program) -> (Result<()>, String) {
    let mut buffer = Vec::new();
    let result = match Evaluator::with_output(program, &mut buffer) {
        Ok(mut evaluator) => evaluator.run(),
        Err(error) => Err(error),
    };
    (result, String::from_utf8_lossy(&buffer).into_owned())
}

/// Run a `main`-only program with a captured output channel.
pub(crate) fn run_main(body: Node) -> (Result<()>, String) {
    run_program_capturing(main_only(body))
}
