//! LinkMe CLI - Markdown documentation builder.
//!
//! Provides two modes:
//! - `--init [PATH]`: Create a `.LinkMe/` project and seed an example document
//! - `--build [PATH]`: Substitute `{! CODEBLOCK !}` directives and render HTML

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use commands::{BuildCommand, InitCommand};
use error::CliError;
use output::Output;

/// LinkMe - embed source snippets in markdown documentation.
#[derive(Parser, Debug)]
#[command(name = "linkme", version, about)]
struct Cli {
    /// Initialize a project in PATH (default: current directory).
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = ".",
        conflicts_with = "build"
    )]
    init: Option<PathBuf>,

    /// Build the project rooted at PATH (default: current directory).
    #[arg(
        short,
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = "."
    )]
    build: Option<PathBuf>,

    /// Input markdown file (recorded on init, overrides project.json on build).
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file (recorded on init, overrides project.json on build).
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Replace an existing project on init.
    #[arg(short, long, requires = "init", conflicts_with = "build")]
    force: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn run(self) -> Result<(), CliError> {
        if let Some(root) = self.init {
            InitCommand {
                root,
                input: self.input,
                output: self.output,
                force: self.force,
            }
            .execute()
        } else if let Some(root) = self.build {
            BuildCommand {
                root,
                input: self.input,
                output: self.output,
            }
            .execute()
        } else {
            let _ = Cli::command().print_help();
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.run() {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
