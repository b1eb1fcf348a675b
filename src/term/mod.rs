/*!
## Terminal driver

Loads a BEEP source file, shows what was loaded, runs it and reports
how the run ended. This is the only place that decides exit codes.

*/

use crate::mach::{Halt, Listing, Runtime};
use ansi_term::Style;
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use tracing::info;

/// Exit code for a run abandoned at the step ceiling.
pub const EXIT_LIMIT: i32 = 1;

#[derive(Debug, Clone)]
pub struct Options {
    pub source: PathBuf,
    pub verbose: bool,
    pub quiet: bool,
}

pub fn main(options: &Options) -> Result<i32> {
    let stdout = std::io::stdout();
    let style = if stdout.is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    };
    let mut out = stdout.lock();

    let listing = Listing::load_file(&options.source)
        .with_context(|| format!("cannot load {}", options.source.display()))?;
    info!(source = %options.source.display(), "loaded");

    if !options.quiet {
        writeln!(out, "BEEP source code in {}:", options.source.display())?;
        write!(out, "{}", listing.source_lines())?;
        for warning in listing.warnings() {
            writeln!(out, "{}", style.paint(format!("***Error: {}", warning)))?;
        }
        write!(out, "{}", listing.var().table())?;
        write!(out, "{}", listing.link().table())?;
    }

    writeln!(out, "execution begins ...")?;
    let outcome = Runtime::run(listing, options.verbose, &mut out)?;
    match &outcome.halt {
        Halt::Normal => {}
        Halt::Error(error) => {
            let line_number = error.line_number().unwrap_or_default();
            writeln!(
                out,
                "{}",
                style.paint(format!("*** line {} error detected ***", line_number))
            )?;
            writeln!(
                out,
                "{}",
                style.paint(format!("{:<10} {} *** {} ***", "", line_number, error.text()))
            )?;
        }
        Halt::Limit => {
            writeln!(out, "{}", style.paint("Infinite loop most likely encountered"))?;
            out.flush()?;
            return Ok(EXIT_LIMIT);
        }
    }
    writeln!(out, "execution ends, {} lines executed", outcome.executed)?;
    if !options.quiet {
        write!(out, "{}", outcome.vars.table())?;
    }
    out.flush()?;
    Ok(0)
}
