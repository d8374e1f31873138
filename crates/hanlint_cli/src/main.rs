//! hanlint CLI
//!
//! Style checker for Chinese-language Markdown prose.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use hanlint_core::{CheckConfig, Checker};

mod output;

/// hanlint - Style checker for Chinese-language Markdown prose
#[derive(Parser)]
#[command(name = "hanlint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Markdown files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Also check text inside Markdown table rows (skipped by default)
    #[arg(long)]
    check_tables: bool,

    /// Exit successfully even when errors were found
    #[arg(long)]
    warn_only: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

/// Returns whether the invocation should exit non-zero.
fn run(cli: Cli) -> Result<bool> {
    let mut config = if let Some(ref path) = cli.config {
        CheckConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };

    if cli.check_tables {
        config.skip_tables = false;
    }

    // A missing input is fatal before any file is checked.
    for path in &cli.files {
        if !path.is_file() {
            return Err(miette::miette!("File not found: {}", path.display()));
        }
    }

    let checker = Checker::new(config);
    let (reports, failures) = checker.check_files(&cli.files);

    let has_errors = output::print_report(&reports, &cli.format)?;

    if !failures.is_empty() {
        for (path, e) in &failures {
            error!("{}: {}", path.display(), e);
        }
        return Err(miette::miette!(
            "{} file(s) could not be checked",
            failures.len()
        ));
    }

    Ok(has_errors && !cli.warn_only)
}

fn find_config() -> Result<CheckConfig> {
    if let Some(path) = CheckConfig::discover(".") {
        info!("Using config: {}", path.display());
        return CheckConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, using defaults");
    Ok(CheckConfig::new())
}
