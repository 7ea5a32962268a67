use anyhow::{Context, Result};
use char_count::Cli;
use clap_markdown::help_markdown;
use std::io::{self, Write};

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "# char-count CLI Reference")?;
    writeln!(out)?;
    writeln!(
        out,
        "This page contains the auto-generated reference documentation for the `char-count` command-line interface."
    )?;
    writeln!(out)?;
    writeln!(out, "{}", help_markdown::<Cli>()).context("failed to write CLI reference")?;

    Ok(())
}
