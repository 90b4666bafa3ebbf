use clap::{Parser, Subcommand};
use meaning_ir::{Program, SourceLanguage, analyze_file};
use miette::{IntoDiagnostic, MietteHandlerOpts, Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

mod render;

#[derive(Parser)]
#[command(
    name = "meaning",
    version,
    about = "Intent-tagged IR toolchain",
    long_about = "Analyzes source artifacts into an intent-tagged IR, renders fixed backend skeletons, and executes persisted IR documents on a tree-walking VM."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a source artifact, persist its IR, and render backend skeletons
    Build {
        /// Source file to analyze
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Output directory for the IR document and rendered skeletons
        #[arg(short, long, value_name = "DIR", default_value = "out")]
        out: PathBuf,
    },
    /// Execute a persisted IR document on the VM
    Run {
        /// IR document to execute
        #[arg(value_name = "IR_FILE")]
        ir: PathBuf,
    },
}

fn main() {
    setup_miette_handler();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build { source, out }) => handle_build_command(&source, &out),
        Some(Commands::Run { ir }) => handle_run_command(&ir),
        None => {
            // No subcommand provided, show help
            Cli::parse_from(["meaning", "--help"]);
            Ok(())
        }
    };

    if let Err(error) = result {
        eprintln!("{error:?}");
        process::exit(1);
    }
}

/// Configure miette error reporting
fn setup_miette_handler() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .color(true)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

fn handle_build_command(source: &Path, out: &Path) -> Result<()> {
    let language = SourceLanguage::from_path(source);
    println!("[detect] {} => {}", source.display(), language);

    let program = analyze_file(source)?;
    if program.functions.is_empty() {
        eprintln!(
            "warning: no entry point found in {}; the IR will not be runnable",
            source.display()
        );
    }

    let document = program.to_json()?;
    let ir_path = out.join("ir.json");
    write_artifact(&ir_path, &document)?;
    println!("[ir] wrote {}", ir_path.display());

    for artifact in render::render_backends(&program) {
        let path = out.join(artifact.relative_path);
        write_artifact(&path, &artifact.contents)?;
        println!("[{}] wrote {}", artifact.backend, path.display());
    }

    Ok(())
}

fn handle_run_command(ir: &Path) -> Result<()> {
    let document = fs::read_to_string(ir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read IR document {}", ir.display()))?;
    let program = Program::from_json(&document)?;

    meaning_interpreter::run_program(program)?;
    Ok(())
}

fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .into_diagnostic()
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", path.display()))
}
