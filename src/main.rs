//! # BEEP
//!
//! Runs one BEEP program from a file.
//!

use beep::term;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "beep", version, about = "Run a BEEP program", long_about = None)]
struct Cli {
    /// BEEP source file
    source: PathBuf,

    /// Echo each line before it executes
    #[arg(short, long)]
    verbose: bool,

    /// Skip the source listing and the variable and label tables
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = term::Options {
        source: cli.source,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };
    let code = match term::main(&options) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            2
        }
    };
    std::process::exit(code);
}
