use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use household_roster::{write_report, Catalog};

/// Group people into households by address and list the adults
#[derive(Parser, Debug)]
#[command(name = "household-roster", version)]
struct Cli {
    /// Input file, one record of six quoted fields per line [default: input.txt]
    path: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging();

    let mut catalog = Catalog::new();
    let summary = match catalog.load(cli.path.as_deref()) {
        Ok(summary) => summary,
        // Already recorded by the catalog's diagnostics sink
        Err(_) => return Ok(ExitCode::FAILURE),
    };

    println!(
        "Data for path {} loaded successfully.",
        summary.path.display()
    );

    write_report(&catalog, io::stdout().lock())?;

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so stdout carries only the report
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
