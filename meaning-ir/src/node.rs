//! The IR node model and its canonical encoding.
//!
//! A [`Node`] is a tagged, immutable tree value. The wire form is a JSON
//! object whose `intent` field names the variant; the remaining fields are
//! exactly the fields that variant requires. The discriminant tags are fixed
//! by the persisted document format (`value`, `typed_value`, `symbol`,
//! `declare`, `assign`, `output_text`, `compare`, `arithmetic`, `branch`,
//! `loop_until_break`, `return`, `call`, `block`).
//!
//! Construction goes through the builder methods on [`Node`]; the encoding is
//! reached through [`Node::to_json`] / [`Node::from_json`]. Consumers never
//! learn how a tree was built, only its canonical shape.

use crate::error::{IrError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dynamically-typed literal payload: integer, boolean, string, or absent.
///
/// Encoded as the bare JSON value (`10`, `true`, `"hi"`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Boolean(bool),
    Integer(i64),
    Text(String),
    /// Absence of a value, encoded as `null`.
    Absent,
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Boolean(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// Comparison operations, word-named on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareOp {
    GreaterThan,
    LessThan,
    Equal,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompareOp::GreaterThan => "greater_than",
            CompareOp::LessThan => "less_than",
            CompareOp::Equal => "equal",
        };
        write!(f, "{name}")
    }
}

/// Arithmetic operations, word-named on the wire like [`CompareOp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArithmeticOp::Add => "add",
            ArithmeticOp::Subtract => "subtract",
            ArithmeticOp::Multiply => "multiply",
            ArithmeticOp::Divide => "divide",
        };
        write!(f, "{name}")
    }
}

/// One tagged, immutable unit of the IR tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Node {
    /// A constant scalar.
    #[serde(rename = "value")]
    Literal { value: Scalar },

    /// A constant scalar carrying an advisory type tag. The tag is not
    /// enforced at runtime.
    #[serde(rename = "typed_value")]
    TypedLiteral {
        #[serde(rename = "type")]
        type_tag: String,
        value: Scalar,
    },

    /// A variable reference, resolved against the current frame.
    Symbol { name: String },

    /// Bind `name` to the evaluated `value` in the current frame,
    /// overwriting any prior binding. The type tag is advisory.
    Declare {
        name: String,
        #[serde(rename = "type")]
        type_tag: String,
        value: Box<Node>,
    },

    /// Bind `target` to the evaluated `value` in the current frame.
    /// Assigning an undeclared name creates the binding.
    Assign { target: String, value: Box<Node> },

    /// Evaluate `payload` and emit its rendering on the output channel.
    #[serde(rename = "output_text")]
    Output { payload: Box<Node> },

    /// Boolean comparison of two evaluated operands.
    Compare {
        operation: CompareOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Arithmetic on two evaluated operands.
    Arithmetic {
        operation: ArithmeticOp,
        left: Box<Node>,
        right: Box<Node>,
    },

    /// Conditional execution: exactly one of `then` / `else` runs per
    /// evaluation, or neither when the condition is falsy and `else` is
    /// absent.
    Branch {
        condition: Box<Node>,
        then: Box<Node>,
        #[serde(rename = "else")]
        otherwise: Option<Box<Node>>,
    },

    /// Repeat `body` while `condition` evaluates truthy. The condition is
    /// re-evaluated before every iteration.
    #[serde(rename = "loop_until_break")]
    Loop { condition: Box<Node>, body: Box<Node> },

    /// Unwind to the nearest call boundary with an optional value.
    Return { value: Option<Box<Node>> },

    /// Invoke a function from the function table. Arguments are evaluated
    /// left to right in the caller's frame.
    Call { target: String, args: Vec<Node> },

    /// Sequential composition: every action runs in order unless a pending
    /// `return` cuts the sequence short.
    Block { actions: Vec<Node> },
}

impl Node {
    pub fn literal(value: impl Into<Scalar>) -> Self {
        Node::Literal {
            value: value.into(),
        }
    }

    pub fn typed_literal(type_tag: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Node::TypedLiteral {
            type_tag: type_tag.into(),
            value: value.into(),
        }
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol { name: name.into() }
    }

    pub fn declare(name: impl Into<String>, type_tag: impl Into<String>, value: Node) -> Self {
        Node::Declare {
            name: name.into(),
            type_tag: type_tag.into(),
            value: Box::new(value),
        }
    }

    pub fn assign(target: impl Into<String>, value: Node) -> Self {
        Node::Assign {
            target: target.into(),
            value: Box::new(value),
        }
    }

    pub fn output(payload: Node) -> Self {
        Node::Output {
            payload: Box::new(payload),
        }
    }

    pub fn compare(operation: CompareOp, left: Node, right: Node) -> Self {
        Node::Compare {
            operation,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn arithmetic(operation: ArithmeticOp, left: Node, right: Node) -> Self {
        Node::Arithmetic {
            operation,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn branch(condition: Node, then: Node, otherwise: Option<Node>) -> Self {
        Node::Branch {
            condition: Box::new(condition),
            then: Box::new(then),
            otherwise: otherwise.map(Box::new),
        }
    }

    pub fn loop_while(condition: Node, body: Node) -> Self {
        Node::Loop {
            condition: Box::new(condition),
            body: Box::new(body),
        }
    }

    pub fn ret(value: Option<Node>) -> Self {
        Node::Return {
            value: value.map(Box::new),
        }
    }

    pub fn call(target: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call {
            target: target.into(),
            args,
        }
    }

    pub fn block(actions: Vec<Node>) -> Self {
        Node::Block { actions }
    }

    /// Encode this node in its canonical wire form.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| IrError::EncodeFailed { source })
    }

    /// Decode a node from its canonical wire form.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| IrError::MalformedNode { source })
    }
}
