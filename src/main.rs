//! Minigrid - evaluate a small table of numbers, text and expressions.
//!
//! Reads a table (height and width on the first line, then one line of cell
//! tokens per row), computes every expression cell and prints the result as
//! tab-delimited rows.

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use minigrid_core::{Document, LineEnding};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "minigrid")]
#[command(version, about = "Evaluate a table of cells and print the computed grid")]
struct Cli {
    /// Table file to read ("-" or omitted reads standard input)
    input: Option<PathBuf>,

    /// Write the computed table to a file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load settings from this TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Do not read config.toml from the user config directory
    #[arg(long)]
    no_default_config: bool,

    /// Text written after every cell (default: tab)
    #[arg(long, value_name = "STR")]
    delimiter: Option<String>,

    /// Terminate lines with LF instead of CRLF
    #[arg(long)]
    lf: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let (mut options, warnings) = config::load_config(cli.config.as_ref(), !cli.no_default_config);
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    if let Some(delimiter) = cli.delimiter {
        options.delimiter = delimiter;
    }
    if cli.lf {
        options.line_ending = LineEnding::Lf;
    }

    let mut document = match cli.input.as_deref() {
        Some(path) if path != Path::new("-") => Document::load_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        _ => Document::from_reader(io::stdin().lock())
            .context("Failed to load table from standard input")?,
    };

    document.compute();

    match cli.output {
        Some(path) => document
            .save_file(&path, &options)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            document.write_to(&mut stdout, &options)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
