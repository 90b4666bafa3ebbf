//! Program and function containers around the node model.

use crate::error::{IrError, Result};
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// Name of the function every runnable program must define.
pub const ENTRY_POINT: &str = "main";

/// One declared parameter: a name plus an advisory type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_tag: type_tag.into(),
        }
    }
}

/// A named function: ordered parameters, an advisory return type tag, and a
/// body node (typically a block).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub args: Vec<Parameter>,
    pub return_type: String,
    pub body: Node,
}

impl FunctionDefinition {
    pub fn new(
        name: impl Into<String>,
        args: Vec<Parameter>,
        return_type: impl Into<String>,
        body: Node,
    ) -> Self {
        Self {
            name: name.into(),
            args,
            return_type: return_type.into(),
            body,
        }
    }
}

/// A complete IR program: freeform informational metadata plus an ordered
/// list of function definitions.
///
/// A runnable program must contain a function named [`ENTRY_POINT`]; the
/// evaluator enforces that invariant before producing any side effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
    pub functions: Vec<FunctionDefinition>,
}

impl Program {
    pub fn new(functions: Vec<FunctionDefinition>) -> Self {
        Self {
            meta: serde_json::Map::new(),
            functions,
        }
    }

    /// Attach an informational metadata entry.
    pub fn insert_meta(&mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.meta.insert(key.into(), value.into());
    }

    /// Encode this program as a self-contained, pretty-printed IR document.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| IrError::EncodeFailed { source })
    }

    /// Decode a program from a persisted IR document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| IrError::MalformedNode { source })
    }
}
