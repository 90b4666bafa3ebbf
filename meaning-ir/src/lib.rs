//! Intent-tagged IR for the meaning toolchain.
//!
//! This crate owns the IR data model and everything that produces or encodes
//! it:
//!
//! - The [`Node`] sum type, one variant per intent, together with the
//!   [`Program`] and [`FunctionDefinition`] containers.
//! - The canonical wire encoding: a self-describing JSON object per node
//!   carrying an `intent` discriminant. Decoding rejects unknown intents,
//!   unknown operation names, and missing fields.
//! - A builder-facing construction API (`Node::declare`, `Node::branch`, ...)
//!   kept distinct from the wire form, so hand-built trees, analyzer output,
//!   and decoded documents are indistinguishable to consumers.
//! - The stub source analyzer that probes a source artifact for an entry
//!   point and emits a canned demonstration program.

pub mod analyzer;
pub mod error;
pub mod node;
pub mod program;

pub use analyzer::{analyze_file, analyze_source, SourceLanguage};
pub use error::{IrError, Result};
pub use node::{ArithmeticOp, CompareOp, Node, Scalar};
pub use program::{FunctionDefinition, Parameter, Program, ENTRY_POINT};
