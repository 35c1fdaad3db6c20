//! External Frameworks Validator
//!
//! Loads a MultiKueue external framework configuration, builds the adapter
//! registry from it and reports every rejected entry at once.
//!
//! # Usage
//!
//! ```bash
//! # Bare module configuration (YAML, or JSON by extension)
//! external-frameworks-validator frameworks.yaml
//!
//! # Module section of a full host configuration
//! external-frameworks-validator --module-section config/hyperspot.yaml
//!
//! # JSON output
//! external-frameworks-validator --json frameworks.yaml
//! ```

// CLI tools are expected to print to stdout/stderr
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use external_frameworks::{AdapterRegistry, ExternalFrameworksConfig};
use tracing_subscriber::EnvFilter;

use crate::report::Report;

/// External Frameworks Validator
///
/// Parses every configured framework name into a GVK, detects duplicates and
/// prints all problems found, or the adapters that would be registered.
#[derive(Parser, Debug)]
#[command(name = "external-frameworks-validator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (YAML, or JSON when the extension is .json)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Read `modules.external-frameworks.config` from a host configuration
    /// file instead of a bare module configuration
    #[arg(long)]
    module_section: bool,

    /// Output results as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(report) if report.ok => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Report> {
    let config = if cli.module_section {
        ExternalFrameworksConfig::load_from_host(&cli.config)
    } else {
        ExternalFrameworksConfig::load(&cli.config)
    }
    .with_context(|| format!("cannot load {}", cli.config.display()))?;

    tracing::info!(
        path = %cli.config.display(),
        entries = config.external_frameworks.len(),
        "Validating external framework configuration"
    );

    let registry = AdapterRegistry::with_policy(config.on_invalid_reload);
    let outcome = registry.initialize(&config.external_frameworks);
    let report = Report::new(&cli.config, &config, &registry, outcome.as_ref().err());

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        report.print();
    }
    Ok(report)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
