//! Centralized error handling for ev_temp_map
//!
//! Argument validation failures and libnetcdf failures share one error type so
//! callers handle both at the same call site.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ev_temp_map operations
#[derive(Error, Debug)]
pub enum EvTempMapError {
    /// A file path, score or bin size was rejected before any I/O
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The file path does not reference an existing file
    #[error("{} does not exist!", .path.display())]
    NotFound { path: PathBuf },

    /// Variable not found in NetCDF file
    #[error("Variable '{var}' not found in {}", .path.display())]
    MissingVariable { var: String, path: PathBuf },

    /// libnetcdf could not open the file
    #[error("Unable to read {} as NetCDF: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: netcdf::Error,
    },

    /// Variable has an unexpected number of dimensions
    #[error("Variable '{var}' has shape {found:?}, expected {expected}")]
    InvalidShape {
        var: String,
        expected: String,
        found: Vec<usize>,
    },

    /// NetCDF read errors
    #[error("NetCDF error: {0}")]
    NetCDF(#[from] netcdf::Error),

    /// Array shape or dimension error
    #[error("Array error: {0}")]
    Array(#[from] ndarray::ShapeError),
}

/// Coarse classification of [`EvTempMapError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    MissingVariable,
    Format,
}

impl EvTempMapError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Which part of the error taxonomy this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::MissingVariable { .. } => ErrorKind::MissingVariable,
            Self::UnreadableFile { .. }
            | Self::InvalidShape { .. }
            | Self::NetCDF(_)
            | Self::Array(_) => ErrorKind::Format,
        }
    }
}

/// Result type alias for ev_temp_map operations
pub type Result<T> = std::result::Result<T, EvTempMapError>;
