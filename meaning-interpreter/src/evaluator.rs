//! The tree-walking evaluator.
//!
//! Walks [`Node`] trees against the top frame of the call stack, producing
//! output as a side effect and a [`Flow`] per node. A `return` is not an
//! exception or an unwind: it is an ordinary evaluation outcome that every
//! sequencing construct (block, branch, loop) inspects and forwards until a
//! call boundary catches it.

use crate::call_stack::CallStack;
use crate::error::{Result, RuntimeError};
use crate::frame::Frame;
use crate::function_table::FunctionTable;
use crate::value::Value;
use meaning_ir::{ArithmeticOp, CompareOp, ENTRY_POINT, Node, Program};
use std::cmp::Ordering;
use std::io::{self, Write};

/// Outcome of evaluating one node.
#[derive(Debug)]
enum Flow {
    /// Evaluation ran to completion with this value.
    Value(Value),
    /// A `return` is unwinding towards the nearest call boundary.
    Return(Value),
}

/// Unwrap the value of a sub-evaluation, forwarding a pending `return` to
/// the caller unchanged.
macro_rules! subeval {
    ($self:ident, $node:expr) => {
        match $self.eval($node)? {
            Flow::Value(value) => value,
            signal @ Flow::Return(_) => return Ok(signal),
        }
    };
}

/// Evaluator over a loaded program.
///
/// Owns the function table and the call stack exclusively; running two
/// programs concurrently requires two evaluators. Output is written to the
/// configured sink in evaluation order.
pub struct Evaluator<W = io::Stdout> {
    functions: FunctionTable,
    stack: CallStack,
    out: W,
}

impl Evaluator<io::Stdout> {
    /// Build an evaluator whose output channel is stdout.
    ///
    /// Fails with `MissingEntryPoint` when the program defines no `main`;
    /// the check runs before any side effect.
    pub fn new(program: Program) -> Result<Self> {
        Self::with_output(program, io::stdout())
    }
}

impl<W: Write> Evaluator<W> {
    /// Build an evaluator with a custom output channel.
    pub fn with_output(program: Program, out: W) -> Result<Self> {
        let functions = FunctionTable::from_program(program);
        if !functions.contains(ENTRY_POINT) {
            return Err(RuntimeError::MissingEntryPoint);
        }
        Ok(Self {
            functions,
            stack: CallStack::new(),
            out,
        })
    }

    /// Run the program: push a fresh frame and evaluate `main`'s body.
    ///
    /// A `return` reaching the top level stops execution; its carried value
    /// is discarded. Any failure aborts the run immediately.
    pub fn run(&mut self) -> Result<()> {
        let main = self
            .functions
            .get(ENTRY_POINT)
            .ok_or(RuntimeError::MissingEntryPoint)?;
        self.stack.push(Frame::new())?;
        let outcome = self.eval(&main.body);
        self.stack.pop();
        outcome.map(|_| ())
    }

    fn eval(&mut self, node: &Node) -> Result<Flow> {
        match node {
            Node::Literal { value } => Ok(Flow::Value(Value::from(value))),

            // The type tag is advisory and not enforced at runtime.
            Node::TypedLiteral { value, .. } => Ok(Flow::Value(Value::from(value))),

            Node::Symbol { name } => {
                let value = self
                    .frame()?
                    .get(name)
                    .cloned()
                    .ok_or_else(|| RuntimeError::unbound_name(name))?;
                Ok(Flow::Value(value))
            }

            Node::Declare { name, value, .. } => {
                let value = subeval!(self, value);
                self.frame_mut()?.bind(name.clone(), value);
                Ok(Flow::Value(Value::Unit))
            }

            Node::Assign { target, value } => {
                let value = subeval!(self, value);
                self.frame_mut()?.bind(target.clone(), value);
                Ok(Flow::Value(Value::Unit))
            }

            Node::Output { payload } => {
                let value = subeval!(self, payload);
                writeln!(self.out, "{value}")?;
                Ok(Flow::Value(Value::Unit))
            }

            Node::Compare {
                operation,
                left,
                right,
            } => {
                let left = subeval!(self, left);
                let right = subeval!(self, right);
                let result = match operation {
                    CompareOp::Equal => left.equals(&right),
                    CompareOp::GreaterThan => left.compare(&right)? == Ordering::Greater,
                    CompareOp::LessThan => left.compare(&right)? == Ordering::Less,
                };
                Ok(Flow::Value(Value::Boolean(result)))
            }

            Node::Arithmetic {
                operation,
                left,
                right,
            } => {
                let left = subeval!(self, left);
                let right = subeval!(self, right);
                let result = match operation {
                    ArithmeticOp::Add => left.add(&right)?,
                    ArithmeticOp::Subtract => left.subtract(&right)?,
                    ArithmeticOp::Multiply => left.multiply(&right)?,
                    ArithmeticOp::Divide => left.divide(&right)?,
                };
                Ok(Flow::Value(result))
            }

            Node::Branch {
                condition,
                then,
                otherwise,
            } => {
                let condition = subeval!(self, condition);
                if condition.is_truthy() {
                    self.eval(then)
                } else if let Some(otherwise) = otherwise {
                    self.eval(otherwise)
                } else {
                    Ok(Flow::Value(Value::Unit))
                }
            }

            Node::Loop { condition, body } => {
                // The condition is re-evaluated before every iteration.
                loop {
                    let condition = subeval!(self, condition);
                    if !condition.is_truthy() {
                        break;
                    }
                    match self.eval(body)? {
                        Flow::Value(_) => {}
                        signal @ Flow::Return(_) => return Ok(signal),
                    }
                }
                Ok(Flow::Value(Value::Unit))
            }

            Node::Return { value } => {
                let value = match value {
                    Some(value) => subeval!(self, value),
                    None => Value::Unit,
                };
                Ok(Flow::Return(value))
            }

            Node::Call { target, args } => self.eval_call(target, args),

            Node::Block { actions } => {
                for action in actions {
                    match self.eval(action)? {
                        Flow::Value(_) => {}
                        signal @ Flow::Return(_) => return Ok(signal),
                    }
                }
                Ok(Flow::Value(Value::Unit))
            }
        }
    }

    /// Invoke a function: arguments are evaluated left to right in the
    /// caller's frame, then bound by position in a fresh frame. A `return`
    /// is caught here and becomes the call's value; normal completion
    /// yields no value.
    fn eval_call(&mut self, target: &str, args: &[Node]) -> Result<Flow> {
        let function = self
            .functions
            .get(target)
            .ok_or_else(|| RuntimeError::unknown_function(target))?;
        if function.args.len() != args.len() {
            return Err(RuntimeError::arity_mismatch(
                target,
                function.args.len(),
                args.len(),
            ));
        }

        let mut evaluated = Vec::with_capacity(args.len());
        for arg in args {
            evaluated.push(subeval!(self, arg));
        }

        let mut frame = Frame::new();
        for (parameter, value) in function.args.iter().zip(evaluated) {
            frame.bind(parameter.name.clone(), value);
        }

        self.stack.push(frame)?;
        let outcome = self.eval(&function.body);
        self.stack.pop();

        match outcome? {
            Flow::Return(value) => Ok(Flow::Value(value)),
            Flow::Value(_) => Ok(Flow::Value(Value::Unit)),
        }
    }

    fn frame(&self) -> Result<&Frame> {
        self.stack
            .current()
            .ok_or_else(|| RuntimeError::internal("no active frame"))
    }

    fn frame_mut(&mut self) -> Result<&mut Frame> {
        self.stack
            .current_mut()
            .ok_or_else(|| RuntimeError::internal("no active frame"))
    }
}
