//! # route-planner
//!
//! Generates the mall catalog, then either plans one route or sweeps every
//! small selection and checks the results. Output is JSON on stdout.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use mall_route_brute_force::TimeRates;
use mall_route_core::{Catalog, CatalogConfig, Error, Result};
use mall_route_validation::{logging, route_report, sweep};

#[derive(Parser)]
#[command(name = "route-planner")]
#[command(about = "Shortest round trips through a mall catalog")]
struct Cli {
    /// JSON catalog config; missing fields use the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the catalog seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the catalog grid size
    #[arg(long)]
    grid_size: Option<u32>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Plan the shortest round trip through the given locations
    Route {
        /// Comma-separated location labels, e.g. "Grocery,Toys & Games"
        #[arg(long, value_delimiter = ',')]
        select: Vec<String>,
    },
    /// Solve and check every selection of up to `max_stops` locations
    Sweep {
        #[arg(long, default_value_t = 5)]
        max_stops: usize,
    },
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(grid_size) = cli.grid_size {
        config.grid_size = grid_size;
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<CatalogConfig> {
    let json = std::fs::read_to_string(path).map_err(|e| {
        Error::invalid_input(format!("failed to read config {}: {e}", path.display()))
    })?;
    CatalogConfig::from_json_str(&json)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}

/// Returns whether every produced route passed its checks.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let catalog = Catalog::generate(&config)?;
    let rates = TimeRates::default();
    info!(
        "catalog ready: {} locations, origin {:?}",
        catalog.len(),
        catalog.origin()
    );

    match &cli.command {
        Command::Route { select } => {
            let selection: Vec<String> = select
                .iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            let report = route_report(&catalog, &selection, &rates, config.grid_size)?;
            info!(
                "route: {} stops, distance {:.2}, about {:.1} min",
                selection.len(),
                report.distance,
                report.minutes
            );
            print_json(&report)?;
            Ok(true)
        }
        Command::Sweep { max_stops } => {
            let (rows, summary) = sweep(&catalog, *max_stops, &rates)?;
            for row in &rows {
                print_json(row)?;
            }
            print_json(&summary)?;
            Ok(summary.unsound == 0)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logger(cli.verbose) {
        eprintln!("logger init failed: {e}");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("sweep found unsound routes");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
