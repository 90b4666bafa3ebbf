//! Call-frame lifecycle, argument passing, and return through the call
//! boundary.

use super::{main_only, run_main, run_program_capturing};
use meaning_ir::{
    ArithmeticOp, CompareOp, ENTRY_POINT, FunctionDefinition, Node, Parameter, Program,
};
use pretty_assertions::assert_eq;

fn add_function() -> FunctionDefinition {
    FunctionDefinition::new(
        "add",
        vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
        "int",
        Node::block(vec![Node::ret(Some(Node::arithmetic(
            ArithmeticOp::Add,
            Node::symbol("a"),
            Node::symbol("b"),
        )))]),
    )
}

#[test]
fn test_call_yields_the_returned_value() {
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::block(vec![
            Node::declare(
                "r",
                "int",
                Node::call("add", vec![Node::literal(2), Node::literal(3)]),
            ),
            Node::output(Node::symbol("r")),
        ]),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, add_function()]));

    result.unwrap();
    assert_eq!(output, "5\n");
}

#[test]
fn test_call_returning_a_comparison() {
    let check = FunctionDefinition::new(
        "check",
        vec![Parameter::new("a", "int"), Parameter::new("b", "int")],
        "bool",
        Node::block(vec![Node::ret(Some(Node::compare(
            CompareOp::LessThan,
            Node::symbol("a"),
            Node::symbol("b"),
        )))]),
    );
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::output(Node::call(
            "check",
            vec![Node::literal(2), Node::literal(3)],
        )),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, check]));

    result.unwrap();
    assert_eq!(output, "true\n");
}

#[test]
fn test_return_unwinds_nested_blocks_branches_and_loops() {
    // The return sits three constructs deep; nothing after it in the
    // function may run, and its value must surface at the call site.
    let deep = FunctionDefinition::new(
        "deep",
        vec![],
        "int",
        Node::block(vec![
            Node::loop_while(
                Node::literal(true),
                Node::block(vec![
                    Node::branch(
                        Node::literal(true),
                        Node::block(vec![
                            Node::ret(Some(Node::literal(42))),
                            Node::output(Node::literal("after return in branch")),
                        ]),
                        None,
                    ),
                    Node::output(Node::literal("after branch in loop")),
                ]),
            ),
            Node::output(Node::literal("after loop")),
        ]),
    );
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::output(Node::call("deep", vec![])),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, deep]));

    result.unwrap();
    assert_eq!(output, "42\n");
}

#[test]
fn test_each_call_gets_an_isolated_frame() {
    // The callee must not see the caller's bindings.
    let peek = FunctionDefinition::new(
        "peek",
        vec![],
        "unit",
        Node::output(Node::symbol("x")),
    );
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::block(vec![
            Node::declare("x", "int", Node::literal(10)),
            Node::call("peek", vec![]),
        ]),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, peek]));

    assert!(matches!(
        result,
        Err(crate::RuntimeError::UnboundName { ref name }) if name == "x"
    ));
    assert_eq!(output, "");
}

#[test]
fn test_arguments_are_evaluated_in_the_caller_frame() {
    let echo = FunctionDefinition::new(
        "echo",
        vec![Parameter::new("v", "int")],
        "unit",
        Node::output(Node::symbol("v")),
    );
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::block(vec![
            Node::declare("x", "int", Node::literal(7)),
            Node::call("echo", vec![Node::symbol("x")]),
        ]),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, echo]));

    result.unwrap();
    assert_eq!(output, "7\n");
}

#[test]
fn test_call_without_return_yields_no_value() {
    let noop = FunctionDefinition::new("noop", vec![], "unit", Node::block(vec![]));
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::block(vec![
            Node::declare("r", "unit", Node::call("noop", vec![])),
            Node::output(Node::symbol("r")),
        ]),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, noop]));

    result.unwrap();
    assert_eq!(output, "unit\n");
}

#[test]
fn test_return_from_main_stops_the_run_and_discards_its_value() {
    let (result, output) = run_main(Node::block(vec![
        Node::output(Node::literal("before")),
        Node::ret(Some(Node::literal(99))),
        Node::output(Node::literal("after")),
    ]));

    result.unwrap();
    assert_eq!(output, "before\n");
}

#[test]
fn test_recursive_calls_unwind_cleanly() {
    // countdown(n) recurses until n reaches 0, then returns it.
    let countdown = FunctionDefinition::new(
        "countdown",
        vec![Parameter::new("n", "int")],
        "int",
        Node::block(vec![
            Node::branch(
                Node::compare(CompareOp::GreaterThan, Node::symbol("n"), Node::literal(0)),
                Node::ret(Some(Node::call(
                    "countdown",
                    vec![Node::arithmetic(
                        ArithmeticOp::Subtract,
                        Node::symbol("n"),
                        Node::literal(1),
                    )],
                ))),
                None,
            ),
            Node::ret(Some(Node::symbol("n"))),
        ]),
    );
    let main = FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::output(Node::call("countdown", vec![Node::literal(5)])),
    );
    let (result, output) = run_program_capturing(Program::new(vec![main, countdown]));

    result.unwrap();
    assert_eq!(output, "0\n");
}

#[test]
fn test_program_built_by_hand_matches_decoded_form() {
    // The evaluator must be indifferent to how the tree was constructed.
    let program = main_only(Node::output(Node::literal("hello")));
    let document = program.to_json().unwrap();
    let decoded = Program::from_json(&document).unwrap();

    let (built_result, built_output) = run_program_capturing(program);
    let (decoded_result, decoded_output) = run_program_capturing(decoded);

    built_result.unwrap();
    decoded_result.unwrap();
    assert_eq!(built_output, decoded_output);
}
