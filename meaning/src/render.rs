// Backend skeleton renderer for meaning IR programs.
// Emits fixed per-target source text driven by the program's display string.

use meaning_ir::{Node, Program, Scalar};
use std::fmt;

/// Message used when a program has no output node to borrow from.
const DEFAULT_MESSAGE: &str = "Hello from Meaning IR";

/// Render targets, each mapping to one skeleton file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Llvm,
    Jvm,
    Dotnet,
    Native,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Backend::Llvm => "llvm",
            Backend::Jvm => "jvm",
            Backend::Dotnet => "dotnet",
            Backend::Native => "native",
        };
        write!(f, "{name}")
    }
}

/// One rendered artifact: the target, where it lands relative to the output
/// directory, and the skeleton text.
pub struct BackendArtifact {
    pub backend: Backend,
    pub relative_path: &'static str,
    pub contents: String,
}

/// Render every backend skeleton for a program.
///
/// Pure function of the IR; no evaluation happens here.
pub fn render_backends(program: &Program) -> Vec<BackendArtifact> {
    let message = display_message(program).unwrap_or_else(|| DEFAULT_MESSAGE.to_string());
    vec![
        BackendArtifact {
            backend: Backend::Llvm,
            relative_path: "llvm/main.c",
            contents: render_c(&message),
        },
        BackendArtifact {
            backend: Backend::Jvm,
            relative_path: "jvm/Main.java",
            contents: render_java(&message),
        },
        BackendArtifact {
            backend: Backend::Dotnet,
            relative_path: "dotnet/Program.cs",
            contents: render_csharp(&message),
        },
        BackendArtifact {
            backend: Backend::Native,
            relative_path: "native/main.asm",
            contents: render_nasm(&message),
        },
    ]
}

/// The program's display string: the first output node with a string-literal
/// payload, found depth-first across functions in order.
pub fn display_message(program: &Program) -> Option<String> {
    program
        .functions
        .iter()
        .find_map(|function| first_output(&function.body))
}

fn first_output(node: &Node) -> Option<String> {
    match node {
        Node::Output { payload } => match payload.as_ref() {
            Node::Literal {
                value: Scalar::Text(text),
            }
            | Node::TypedLiteral {
                value: Scalar::Text(text),
                ..
            } => Some(text.clone()),
            other => first_output(other),
        },
        Node::Declare { value, .. } | Node::Assign { value, .. } => first_output(value),
        Node::Compare { left, right, .. } | Node::Arithmetic { left, right, .. } => {
            first_output(left).or_else(|| first_output(right))
        }
        Node::Branch {
            condition,
            then,
            otherwise,
        } => first_output(condition)
            .or_else(|| first_output(then))
            .or_else(|| otherwise.as_deref().and_then(first_output)),
        Node::Loop { condition, body } => {
            first_output(condition).or_else(|| first_output(body))
        }
        Node::Return { value } => value.as_deref().and_then(first_output),
        Node::Call { args, .. } => args.iter().find_map(first_output),
        Node::Block { actions } => actions.iter().find_map(first_output),
        Node::Literal { .. } | Node::TypedLiteral { .. } | Node::Symbol { .. } => None,
    }
}

/// Escape a message for use inside a C-family string literal.
fn escape_literal(message: &str) -> String {
    message.replace('\\', "\\\\").replace('"', "\\\"")
}

fn render_c(message: &str) -> String {
    format!(
        "#include <stdio.h>\n\nint main() {{\n    printf(\"{}\\n\");\n}}\n",
        escape_literal(message)
    )
}

fn render_java(message: &str) -> String {
    format!(
        "public class Main {{\n    public static void main(String[] args) {{\n        System.out.println(\"{}\");\n    }}\n}}\n",
        escape_literal(message)
    )
}

fn render_csharp(message: &str) -> String {
    format!(
        "using System;\n\nclass Program {{\n    static void Main() {{\n        Console.WriteLine(\"{}\");\n    }}\n}}\n",
        escape_literal(message)
    )
}

fn render_nasm(message: &str) -> String {
    format!(
        "global _start\nsection .text\n_start:\n    mov rax, 1\n    mov rdi, 1\n    mov rsi, msg\n    mov rdx, {}\n    syscall\n    mov rax, 60\n    xor rdi, rdi\n    syscall\nsection .data\nmsg db \"{message}\", 10\n",
        message.len() + 1
    )
}
