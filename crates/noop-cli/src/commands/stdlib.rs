//! Stdlib command
//!
//! Usage: noop stdlib [--format outline|dot|ops|digest] [--output <FILE>]

use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, ValueEnum};
use noop_core::errors::ExError;
use noop_core::render::{render_dot, render_outline};
use noop_core::snapshot::workspace_digest;
use noop_core::{log_op_end, log_op_start};
use noop_core::{Controller, OperationSource, StandardLibraryBuilder, Workspace};

#[derive(Debug, Args)]
pub struct StdlibArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Outline)]
    pub format: Format,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented enter/leave outline
    Outline,
    /// Graphviz digraph of the containment forest
    Dot,
    /// Applied operation log as JSON
    Ops,
    /// Structural digest (SHA-256 hex)
    Digest,
}

/// Execute stdlib command
pub fn execute(args: StdlibArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    log_op_start!("cli_stdlib", format = ?args.format);

    let mut workspace = Workspace::new();
    let log = {
        let mut controller = Controller::new(&mut workspace);
        controller
            .apply(StandardLibraryBuilder::new().build())
            .map_err(|e| controller.ex_error(e))?;
        controller.into_log()
    };

    let text = match args.format {
        Format::Outline => render_outline(&workspace).map_err(ExError::from)?,
        Format::Dot => render_dot(&workspace).map_err(ExError::from)?,
        Format::Ops => format!("{}\n", serde_json::to_string_pretty(&log)?),
        Format::Digest => format!("{}\n", workspace_digest(&workspace).map_err(ExError::from)?),
    };

    if let Some(output_path) = args.output {
        std::fs::write(&output_path, text)?;
        println!("✓ Wrote {}", output_path.display());
    } else {
        print!("{}", text);
    }

    log_op_end!(
        "cli_stdlib",
        duration_ms = start.elapsed().as_millis() as u64,
        elements = workspace.len()
    );
    Ok(())
}
