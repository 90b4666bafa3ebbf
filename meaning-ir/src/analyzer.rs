//! Stub source analyzer.
//!
//! Inspects a source artifact, detects its language from the file extension,
//! and probes for that language's entry-point signature. A hit produces a
//! canned demonstration program; a miss produces a program with no functions
//! (the evaluator, not the analyzer, enforces the entry-point invariant).
//! Any real analyzer producing the same Program shape may be substituted.

use crate::error::{IrError, Result};
use crate::node::{CompareOp, Node};
use crate::program::{FunctionDefinition, Program, ENTRY_POINT};
use std::fmt;
use std::fs;
use std::path::Path;

/// Source languages recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLanguage {
    Rust,
    Go,
    C,
    Cpp,
    Python,
    Java,
    Kotlin,
    TypeScript,
    Swift,
    Unknown,
}

impl SourceLanguage {
    /// Detect the language from a path's extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("rs") => SourceLanguage::Rust,
            Some("go") => SourceLanguage::Go,
            Some("c") => SourceLanguage::C,
            Some("cpp" | "cc") => SourceLanguage::Cpp,
            Some("py") => SourceLanguage::Python,
            Some("java") => SourceLanguage::Java,
            Some("kt") => SourceLanguage::Kotlin,
            Some("ts") => SourceLanguage::TypeScript,
            Some("swift") => SourceLanguage::Swift,
            _ => SourceLanguage::Unknown,
        }
    }

    /// Lowercase identifier recorded in program metadata.
    pub fn name(self) -> &'static str {
        match self {
            SourceLanguage::Rust => "rust",
            SourceLanguage::Go => "go",
            SourceLanguage::C => "c",
            SourceLanguage::Cpp => "cpp",
            SourceLanguage::Python => "python",
            SourceLanguage::Java => "java",
            SourceLanguage::Kotlin => "kotlin",
            SourceLanguage::TypeScript => "typescript",
            SourceLanguage::Swift => "swift",
            SourceLanguage::Unknown => "unknown",
        }
    }

    /// Human-facing language name used in emitted banner text.
    fn display_name(self) -> &'static str {
        match self {
            SourceLanguage::Rust => "Rust",
            SourceLanguage::Go => "Go",
            SourceLanguage::C => "C",
            SourceLanguage::Cpp => "C++",
            SourceLanguage::Python => "Python",
            SourceLanguage::Java => "Java",
            SourceLanguage::Kotlin => "Kotlin",
            SourceLanguage::TypeScript => "TypeScript",
            SourceLanguage::Swift => "Swift",
            SourceLanguage::Unknown => "Unknown",
        }
    }

    /// The substring whose presence marks an entry point in this language.
    fn entry_point_marker(self) -> Option<&'static str> {
        match self {
            SourceLanguage::Rust => Some("fn main"),
            SourceLanguage::Go => Some("func main()"),
            SourceLanguage::C | SourceLanguage::Cpp => Some("int main"),
            SourceLanguage::Python => Some("def main"),
            SourceLanguage::Java => Some("public static void main"),
            SourceLanguage::Kotlin => Some("fun main()"),
            SourceLanguage::TypeScript => Some("function main()"),
            SourceLanguage::Swift => Some("func main"),
            SourceLanguage::Unknown => None,
        }
    }
}

impl fmt::Display for SourceLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Read a source artifact and analyze it into an IR program.
pub fn analyze_file(path: &Path) -> Result<Program> {
    let source = fs::read_to_string(path).map_err(|source| IrError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    let language = SourceLanguage::from_path(path);
    Ok(analyze_source(language, &source, &path.display().to_string()))
}

/// Analyze source text already read from `origin`.
pub fn analyze_source(language: SourceLanguage, source: &str, origin: &str) -> Program {
    let mut program = Program::new(Vec::new());
    program.insert_meta("source_language", language.name());
    program.insert_meta("source_file", origin);

    if let Some(marker) = language.entry_point_marker() {
        if source.contains(marker) {
            program.functions.push(demo_entry_point(language));
        }
    }

    program
}

/// The canned `main` emitted for every recognized entry point: a banner,
/// a declaration, a guarded output, and a loop broken by a return.
fn demo_entry_point(language: SourceLanguage) -> FunctionDefinition {
    let banner = format!("{} main executed", language.display_name());
    FunctionDefinition::new(
        ENTRY_POINT,
        vec![],
        "unit",
        Node::block(vec![
            Node::output(Node::literal(banner)),
            Node::declare("x", "int", Node::literal(10)),
            Node::branch(
                Node::compare(CompareOp::GreaterThan, Node::symbol("x"), Node::literal(5)),
                Node::block(vec![Node::output(Node::literal("x is greater than 5"))]),
                None,
            ),
            Node::loop_while(
                Node::literal(true),
                Node::block(vec![
                    Node::output(Node::literal("looping")),
                    Node::ret(None),
                ]),
            ),
        ]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_language_detection() {
        assert_eq!(
            SourceLanguage::from_path(Path::new("demo.rs")),
            SourceLanguage::Rust
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("demo.cc")),
            SourceLanguage::Cpp
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("demo.cpp")),
            SourceLanguage::Cpp
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("demo.kt")),
            SourceLanguage::Kotlin
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("demo.txt")),
            SourceLanguage::Unknown
        );
        assert_eq!(
            SourceLanguage::from_path(Path::new("Makefile")),
            SourceLanguage::Unknown
        );
    }

    #[test]
    fn test_entry_point_probe_hit() {
        let program = analyze_source(
            SourceLanguage::Rust,
            "fn main() { println!(\"hi\"); }",
            "demo.rs",
        );
        assert_eq!(program.functions.len(), 1);
        assert_eq!(program.functions[0].name, ENTRY_POINT);
        assert_eq!(program.meta["source_language"], "rust");
        assert_eq!(program.meta["source_file"], "demo.rs");
    }

    #[test]
    fn test_entry_point_probe_miss() {
        let program = analyze_source(SourceLanguage::Rust, "pub fn helper() {}", "lib.rs");
        assert!(program.functions.is_empty());
    }

    #[test]
    fn test_unknown_language_never_matches() {
        let program = analyze_source(SourceLanguage::Unknown, "fn main() {}", "notes.txt");
        assert!(program.functions.is_empty());
        assert_eq!(program.meta["source_language"], "unknown");
    }

    #[test]
    fn test_demo_program_round_trips() {
        let program = analyze_source(SourceLanguage::Python, "def main():\n    pass", "app.py");
        let document = program.to_json().unwrap();
        assert_eq!(Program::from_json(&document).unwrap(), program);
    }
}
