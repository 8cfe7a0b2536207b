//! doclens - Measure docstring coverage in Python codebases
//!
//! doclens scans Python source files for class and function/method
//! definitions, checks whether each one is immediately followed by a
//! docstring, and reports per-category coverage together with every
//! undocumented definition by file and line.

use clap::Parser;
use doclens::output::{render_report, OutputFormat};
use doclens_core::{
    list_source_files, scan, ClassPattern, FunctionPattern, DEFAULT_EXTENSION,
};
use eyre::{Result, WrapErr};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(
    name = "doclens",
    version,
    about = "Measure docstring coverage in Python codebases"
)]
struct Args {
    /// Root directory (or single file) to scan; prompted for when omitted
    path: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Exit with status 1 when a category is below the threshold
    #[arg(long)]
    check: bool,

    /// Minimum coverage percentage for --check
    #[arg(long, default_value_t = 100.0)]
    threshold: f64,

    /// File extension to scan
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    ext: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let root = match args.path {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let files = list_source_files(&root, &args.ext)
        .wrap_err_with(|| format!("Failed to list source files under {}", root.display()))?;
    debug!(count = files.len(), "listed source files");

    let result = scan(&files, [&ClassPattern, &FunctionPattern]);

    print!("{}", render_report(&result, args.format));

    if args.check && !result.all_passing(args.threshold) {
        std::process::exit(1);
    }

    Ok(())
}

/// Ask for the root path on stdin when none was given on the command line.
fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter directory path: ");
    io::stdout().flush().wrap_err("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .wrap_err("Failed to read path from stdin")?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        eyre::bail!("No path given");
    }
    Ok(PathBuf::from(trimmed))
}
