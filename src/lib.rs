//! ev_temp_map: temperature map extraction from NetCDF grids
//!
//! A small library for the data side of surface temperature maps. It reads the
//! first time slice of a gridded temperature variable, the latitude and
//! longitude coordinates of the grid together with a land/ocean mask, and
//! buckets scores into fixed-width zones for map legends.
//!
//! ## Module Organization
//!
//! - [`temperature`]: temperature grid extraction
//! - [`geo_mask`]: coordinates and land/ocean mask extraction
//! - [`zone`]: score zones
//! - [`netcdf_io`]: scoped read-only NetCDF access
//! - [`masking`]: masked arrays and CF masking/unpacking rules
//! - [`validation`]: eager file path checks
//! - [`summary`]: grid and mask summaries
//! - [`config`]: extraction defaults
//! - [`errors`]: centralized error handling
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use ev_temp_map::prelude::*;
//!
//! let temperature = get_temperature("20200101.nc4", DEFAULT_TEMPERATURE_VAR, DEFAULT_FILL_VALUE).unwrap();
//! let (lat, lon, mask) = get_lat_lon_mask("20200101.nc4", DEFAULT_TEMPERATURE_VAR).unwrap();
//! assert_eq!(mask.dim(), temperature.dim());
//! assert_eq!((lat.len(), lon.len()), temperature.dim());
//!
//! assert_eq!(get_zone(3.1415, DEFAULT_BIN_SIZE).unwrap(), "0.0 - 10.0");
//! ```
//!
//! Each reader opens the file, reads what it needs and closes it again before
//! returning; no handle outlives a call.

pub mod config;
pub mod errors;
pub mod geo_mask;
pub mod masking;
pub mod netcdf_io;
pub mod summary;
pub mod temperature;
pub mod validation;
pub mod zone;

pub use errors::*;
pub use geo_mask::get_lat_lon_mask;
pub use temperature::get_temperature;
pub use zone::{get_zone, parse_score, Zone};

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::config::ExtractionConfig;
    pub use crate::errors::{ErrorKind, EvTempMapError, Result};
    pub use crate::geo_mask::get_lat_lon_mask;
    pub use crate::masking::{MaskRules, MaskedArray};
    pub use crate::netcdf_io::GridReader;
    pub use crate::temperature::{get_temperature, DEFAULT_FILL_VALUE, DEFAULT_TEMPERATURE_VAR};
    pub use crate::zone::{get_zone, parse_score, Zone, DEFAULT_BIN_SIZE};
}
