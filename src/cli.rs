//! Defines command-line interface options using `clap` for the ev-temp-map tool.

use clap::{Parser, Subcommand};
use ev_temp_map::config::ExtractionConfig;
use ev_temp_map::temperature::{DEFAULT_FILL_VALUE, DEFAULT_TEMPERATURE_VAR};
use ev_temp_map::zone::DEFAULT_BIN_SIZE;
use std::path::PathBuf;

/// A CLI tool for pulling temperature maps out of NetCDF files
#[derive(Parser, Debug)]
#[command(
    version,
    name = "ev-temp-map",
    about = "Extract surface temperature, land/ocean masks and score zones"
)]
pub struct Args {
    /// Enable verbose (debug) logging. `RUST_LOG` takes precedence when set.
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarise the first time slice of a temperature variable
    Temperature {
        /// Path to the NetCDF file
        #[arg(short, long)]
        file: PathBuf,

        /// Temperature variable to read
        #[arg(long, default_value = DEFAULT_TEMPERATURE_VAR)]
        var: String,

        /// Value written into masked cells
        #[arg(long, default_value_t = DEFAULT_FILL_VALUE)]
        fill_value: f64,
    },

    /// Print coordinate extents and the land/ocean mask of a variable
    Mask {
        /// Path to the NetCDF file
        #[arg(short, long)]
        file: PathBuf,

        /// Variable whose missing cells form the mask
        #[arg(long, default_value = DEFAULT_TEMPERATURE_VAR)]
        var: String,
    },

    /// Print the zone label of a score in [0, 100]
    Zone {
        /// Score to bucket
        score: String,

        /// Zone width in (0, 100]
        #[arg(long, default_value_t = DEFAULT_BIN_SIZE.to_string())]
        bin_size: String,
    },
}

impl Command {
    /// Extraction settings implied by the subcommand's options
    pub fn config(&self) -> ExtractionConfig {
        let config = ExtractionConfig::default();
        match self {
            Command::Temperature {
                var, fill_value, ..
            } => config.with_var_name(var).with_fill_value(*fill_value),
            Command::Mask { var, .. } => config.with_var_name(var),
            Command::Zone { .. } => config,
        }
    }
}
