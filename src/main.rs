//! Entry point for the ev-temp-map tool.
//! Handles CLI parsing and logging setup, then dispatches to the extraction functions.

use clap::Parser;
use ev_temp_map::prelude::*;
use ev_temp_map::summary::{GridSummary, MaskSummary};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Args, Command};

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: &Command) -> Result<()> {
    let config = command.config();

    match command {
        Command::Temperature { file, .. } => {
            let temperature = get_temperature(file, &config.var_name, config.fill_value)?;

            println!("\n Temperature: {} ({})", config.var_name, file.display());
            println!("================================");
            println!("{}", GridSummary::from_grid(&temperature));
        }
        Command::Mask { file, .. } => {
            let (lat, lon, mask) = get_lat_lon_mask(file, &config.var_name)?;

            println!("\n Land/ocean mask: {} ({})", config.var_name, file.display());
            println!("================================");
            println!("   Latitudes: {} ({})", lat.len(), extent(lat.iter()));
            println!("   Longitudes: {} ({})", lon.len(), extent(lon.iter()));
            println!("{}", MaskSummary::from_mask(&mask));
        }
        Command::Zone { score, bin_size } => {
            let score = parse_score(score)?;
            let config = config.with_bin_size(parse_score(bin_size)?);

            println!("{}", get_zone(score, config.bin_size)?);
        }
    }

    Ok(())
}

fn extent<'a>(values: impl Iterator<Item = &'a f64>) -> String {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });

    if min > max {
        "empty".to_string()
    } else {
        format!("{:.2} to {:.2}", min, max)
    }
}
