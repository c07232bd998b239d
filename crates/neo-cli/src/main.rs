//! neo - explore near-Earth objects and their close approaches.
//!
//! # Commands
//!
//! - `inspect`: look up one NEO by designation or name
//! - `query`: filter close approaches and print or save the matches

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::{InspectArgs, QueryArgs};

/// Explore NASA's near-Earth object and close-approach data
#[derive(Debug, Parser)]
#[command(name = "neo")]
#[command(version)]
#[command(about = "Explore near-Earth objects and their close approaches")]
#[command(propagate_version = true)]
struct Cli {
    /// CSV file of near-Earth objects
    #[arg(long, global = true, default_value = "data/neos.csv")]
    neofile: PathBuf,

    /// JSON file of close approaches
    #[arg(long, global = true, default_value = "data/cad.json")]
    cadfile: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show one near-Earth object
    Inspect(InspectArgs),
    /// Find close approaches that match every given filter
    Query(QueryArgs),
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let db = commands::load_database(&cli.neofile, &cli.cadfile)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::Inspect(args) => commands::inspect(&db, &args, &mut stdout),
        Command::Query(args) => commands::query(&db, &args, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
