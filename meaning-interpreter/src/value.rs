//! Runtime value representation for the meaning interpreter.
//!
//! Defines the Value enum covering the IR's dynamically-typed scalars,
//! along with truthiness, comparisons, and arithmetic.

use crate::error::{Result, RuntimeError};
use meaning_ir::Scalar;
use std::cmp::Ordering;
use std::fmt;

/// Runtime values produced and consumed by the evaluator.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// UTF-8 string
    String(String),
    /// Absence of a value (statements, bare `return`)
    Unit,
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Boolean(_) => "Boolean",
            Value::String(_) => "String",
            Value::Unit => "Unit",
        }
    }

    /// Check if this value is truthy (for branch and loop conditions)
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::String(s) => !s.is_empty(),
            Value::Unit => false,
        }
    }

    // Arithmetic operations

    /// Addition; also concatenates strings
    pub fn add(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
            (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
            _ => Err(RuntimeError::invalid_operation(
                "add",
                self.type_name(),
                other.type_name(),
            )),
        }
    }

    /// Subtraction
    pub fn subtract(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
            _ => Err(RuntimeError::invalid_operation(
                "subtract",
                self.type_name(),
                other.type_name(),
            )),
        }
    }

    /// Multiplication
    pub fn multiply(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
            _ => Err(RuntimeError::invalid_operation(
                "multiply",
                self.type_name(),
                other.type_name(),
            )),
        }
    }

    /// Integer division
    pub fn divide(&self, other: &Value) -> Result<Value> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => {
                if *b == 0 {
                    Err(RuntimeError::DivisionByZero)
                } else {
                    Ok(Value::Integer(a / b))
                }
            }
            _ => Err(RuntimeError::invalid_operation(
                "divide",
                self.type_name(),
                other.type_name(),
            )),
        }
    }

    // Comparison operations

    /// Equality comparison; values of different types are never equal
    pub fn equals(&self, other: &Value) -> bool {
        self == other
    }

    /// Ordering comparison for `greater_than` / `less_than`
    pub fn compare(&self, other: &Value) -> Result<Ordering> {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => Ok(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            _ => Err(RuntimeError::invalid_operation(
                "comparison",
                self.type_name(),
                other.type_name(),
            )),
        }
    }
}

impl From<&Scalar> for Value {
    fn from(scalar: &Scalar) -> Self {
        match scalar {
            Scalar::Integer(n) => Value::Integer(*n),
            Scalar::Boolean(b) => Value::Boolean(*b),
            Scalar::Text(s) => Value::String(s.clone()),
            Scalar::Absent => Value::Unit,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::Unit => write!(f, "unit"),
        }
    }
}
