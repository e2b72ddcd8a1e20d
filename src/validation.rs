//! Eager checks on file paths, run before any NetCDF I/O.

use crate::errors::{EvTempMapError, Result};
use std::path::Path;

/// Ensures `path` names an existing regular file.
///
/// An empty path is rejected as an invalid argument, a missing path as
/// [`EvTempMapError::NotFound`], and anything that exists but is not a
/// regular file (a directory, for instance) as an invalid argument.
pub fn validate_filepath(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(EvTempMapError::invalid_argument(
            "Pass in file path as a non-empty path!",
        ));
    }

    if !path.exists() {
        return Err(EvTempMapError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if !path.is_file() {
        return Err(EvTempMapError::invalid_argument(format!(
            "{} is not a regular file!",
            path.display()
        )));
    }

    Ok(())
}
