//! Coordinates and land/ocean mask extraction

use crate::errors::Result;
use crate::netcdf_io::GridReader;
use ndarray::{Array1, Array2};
use std::path::Path;

/// Name of the latitude coordinate variable
pub const LAT_VAR: &str = "lat";

/// Name of the longitude coordinate variable
pub const LON_VAR: &str = "lon";

/// Extracts latitudes, longitudes and a land/ocean mask from a grid file.
///
/// Latitudes and longitudes are returned whole, with any masked entries
/// replaced by the coordinate variable's own fill value. The mask is `true`
/// wherever the first time slice of `var_name` is missing, which for a land
/// surface variable marks ocean cells.
pub fn get_lat_lon_mask(
    filepath: impl AsRef<Path>,
    var_name: &str,
) -> Result<(Array1<f64>, Array1<f64>, Array2<bool>)> {
    let reader = GridReader::open(filepath.as_ref())?;

    let lat = filled_coordinate(&reader, LAT_VAR)?;
    let lon = filled_coordinate(&reader, LON_VAR)?;
    let mask = reader.first_time_slice(var_name)?.into_mask();

    Ok((lat, lon, mask))
}

fn filled_coordinate(reader: &GridReader, var_name: &str) -> Result<Array1<f64>> {
    let coordinate = reader.coordinate(var_name)?;
    let fill = reader.mask_rules(var_name)?.default_fill();
    Ok(coordinate.filled(fill))
}
