//! Surface temperature extraction

use crate::errors::Result;
use crate::netcdf_io::GridReader;
use ndarray::Array2;
use std::path::Path;

/// Variable read when no other name is given (LIS average surface temperature)
pub const DEFAULT_TEMPERATURE_VAR: &str = "AvgSurfT_tavg";

/// Value written into masked cells: 273.15 K, i.e. 0 °C
pub const DEFAULT_FILL_VALUE: f64 = 273.15;

/// Extracts the first time slice of a temperature variable.
///
/// Masked cells are replaced with `fill_val`. The path is validated before the
/// file is opened, and the file is closed again before this returns.
///
/// # Errors
///
/// `InvalidArgument` or `NotFound` for a bad path, `MissingVariable` when
/// `var_name` is absent, and a format error for unreadable files or a
/// variable that is not `(time, y, x)`.
pub fn get_temperature(
    filepath: impl AsRef<Path>,
    var_name: &str,
    fill_val: f64,
) -> Result<Array2<f64>> {
    let reader = GridReader::open(filepath.as_ref())?;
    let temperature = reader.first_time_slice(var_name)?;

    Ok(temperature.filled(fill_val))
}
