//! Noop CLI
//!
//! Command-line interface for building and inspecting Noop element graphs

use clap::{Parser, Subcommand, ValueEnum};
use noop_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "noop")]
#[command(about = "Noop - operation-based structural graph kernel", long_about = None)]
struct Cli {
    /// Logging profile; logs go to stderr
    #[arg(long, value_enum, global = true)]
    log_profile: Option<LogProfile>,

    /// Shorthand for `--log-profile development`
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Development,
    Production,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the standard library and print it
    Stdlib(commands::stdlib::StdlibArgs),
}

fn main() {
    let cli = Cli::parse();

    let profile = match (cli.log_profile, cli.verbose) {
        (Some(LogProfile::Production), _) => Some(Profile::Production),
        (Some(LogProfile::Development), _) | (None, true) => Some(Profile::Development),
        (None, false) => None,
    };
    if let Some(profile) = profile {
        init(profile);
    }

    let result = match cli.command {
        Commands::Stdlib(args) => commands::stdlib::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
