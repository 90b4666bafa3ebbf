//! Error types for IR encoding, decoding, and source analysis.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced at the IR boundary.
#[derive(Debug, Error, Diagnostic)]
pub enum IrError {
    /// A node or document failed to decode: unrecognized `intent`,
    /// unrecognized operation name, or a missing required field.
    #[error("malformed IR: {source}")]
    #[diagnostic(
        code(meaning::ir::malformed_node),
        help("every node must carry a recognized `intent` and the fields its variant requires")
    )]
    MalformedNode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode IR document: {source}")]
    #[diagnostic(code(meaning::ir::encode_failed))]
    EncodeFailed {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read source artifact {path}: {source}")]
    #[diagnostic(
        code(meaning::ir::source_read),
        help("check that the file exists and is readable")
    )]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for IR results.
pub type Result<T> = std::result::Result<T, IrError>;
