//! assembler – 18-bit ISA one-pass assembler (CLI)

use std::{path::PathBuf, process};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;

use assembler::{DEFAULT_MAX_LINE_LENGTH, Options};

/// CLI options
#[derive(Parser, Debug)]
#[command(author, version, about = "18-bit ISA assembler (Logisim v2.0 raw output)")]
struct Cli {
    /// Assembly source
    input: PathBuf,

    /// Hex image to write
    output: PathBuf,

    /// Longer source lines are truncated to this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    max_line_length: usize,
}

fn init_tracing() -> Result<()> {
    // RUST_LOG selects what is printed; diagnostics always go to stderr.
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new("info"))
        .context("failed to initialise tracing filter")?;
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    init_tracing()?;

    let options = Options { max_line_length: cli.max_line_length };
    let summary = assembler::assemble_file(&cli.input, &cli.output, &options)
        .with_context(|| format!("assembling {}", cli.input.display()))?;

    println!(
        "Assembly finished: {} words written to {}",
        summary.words,
        cli.output.display()
    );
    Ok(())
}

fn main() {
    // Usage problems exit with 1, not clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
