//! Runtime error types for the meaning interpreter.
//!
//! Every failure aborts the current run; there is no local recovery or
//! retry. Diagnostics carry codes and help text via miette.

use miette::Diagnostic;
use thiserror::Error;

/// Runtime errors that can occur while evaluating a program.
#[derive(Debug, Error, Diagnostic)]
pub enum RuntimeError {
    #[error("program has no `main` function")]
    #[diagnostic(
        code(meaning::runtime::missing_entry_point),
        help("every runnable program must define a function named `main`")
    )]
    MissingEntryPoint,

    #[error("undefined name `{name}` in the current frame")]
    #[diagnostic(
        code(meaning::runtime::unbound_name),
        help("declare or assign the name before reading it; frames do not see enclosing calls")
    )]
    UnboundName { name: String },

    #[error("call to unknown function `{target}`")]
    #[diagnostic(
        code(meaning::runtime::unknown_function),
        help("the function table is built once from the program's function list")
    )]
    UnknownFunction { target: String },

    #[error("function `{function}` expects {expected} arguments, got {found}")]
    #[diagnostic(
        code(meaning::runtime::arity_mismatch),
        help("check the call site against the function's declared parameters")
    )]
    ArityMismatch {
        function: String,
        expected: usize,
        found: usize,
    },

    #[error("operation `{operation}` cannot be applied to {left} and {right}")]
    #[diagnostic(code(meaning::runtime::invalid_operation))]
    InvalidOperation {
        operation: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("division by zero")]
    #[diagnostic(
        code(meaning::runtime::division_by_zero),
        help("ensure the divisor is not zero before dividing")
    )]
    DivisionByZero,

    #[error("call stack overflow: maximum depth of {max_depth} exceeded")]
    #[diagnostic(
        code(meaning::runtime::stack_overflow),
        help("check for unbounded recursion")
    )]
    StackOverflow { max_depth: usize },

    #[error("failed to write to the output channel: {source}")]
    #[diagnostic(code(meaning::runtime::output_failed))]
    OutputFailed {
        #[from]
        source: std::io::Error,
    },

    #[error("internal error: {message}")]
    #[diagnostic(code(meaning::runtime::internal))]
    Internal { message: String },
}

impl RuntimeError {
    /// Create an unbound-name error.
    pub fn unbound_name(name: &str) -> Self {
        Self::UnboundName {
            name: name.to_string(),
        }
    }

    /// Create an unknown-function error.
    pub fn unknown_function(target: &str) -> Self {
        Self::UnknownFunction {
            target: target.to_string(),
        }
    }

    /// Create an arity-mismatch error.
    pub fn arity_mismatch(function: &str, expected: usize, found: usize) -> Self {
        Self::ArityMismatch {
            function: function.to_string(),
            expected,
            found,
        }
    }

    /// Create an invalid-operation error from an operator name and the two
    /// operand type names.
    pub fn invalid_operation(operation: &'static str, left: &'static str, right: &'static str) -> Self {
        Self::InvalidOperation {
            operation,
            left,
            right,
        }
    }

    /// Create an internal invariant-violation error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Type alias for interpreter results.
pub type Result<T> = std::result::Result<T, RuntimeError>;
