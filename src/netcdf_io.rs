//! Read-only NetCDF access for gridded climate files
//!
//! [`GridReader`] owns the open `netcdf::File` for the duration of one
//! extraction. The handle is closed when the reader is dropped, so every exit
//! path of a caller, including `?` returns after the file was opened, releases
//! it.

use crate::errors::{EvTempMapError, Result};
use crate::masking::{MaskRules, MaskedArray, StorageType};
use crate::validation::validate_filepath;
use ndarray::{Array1, Array2, Ix1, Ix2};
use netcdf::types::{FloatType, IntType, NcVariableType};
use netcdf::{AttributeValue, File, Variable};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scoped, read-only handle on a gridded NetCDF file
pub struct GridReader {
    file: File,
    path: PathBuf,
}

impl GridReader {
    /// Validate `path` and open it for reading
    pub fn open(path: &Path) -> Result<Self> {
        validate_filepath(path)?;

        let file = netcdf::open(path).map_err(|source| EvTempMapError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened NetCDF file");

        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn variable(&self, var_name: &str) -> Result<Variable<'_>> {
        self.file
            .variable(var_name)
            .ok_or_else(|| EvTempMapError::MissingVariable {
                var: var_name.to_string(),
                path: self.path.clone(),
            })
    }

    /// Reads `var_name` at time index 0 as a masked 2-D grid.
    ///
    /// The variable must be laid out as `(time, y, x)` with at least one time
    /// step.
    pub fn first_time_slice(&self, var_name: &str) -> Result<MaskedArray<Ix2>> {
        let var = self.variable(var_name)?;
        let shape = variable_shape(&var);

        let spatial = match shape[..] {
            [nt, ny, nx] if nt > 0 => Some((ny, nx)),
            _ => None,
        };
        let Some((ny, nx)) = spatial else {
            return Err(EvTempMapError::InvalidShape {
                var: var_name.to_string(),
                expected: "a (time, y, x) variable with at least one time step".to_string(),
                found: shape,
            });
        };

        let raw: Vec<f64> = var.get_values::<f64, _>((0..1, .., ..))?;
        let raw = Array2::from_shape_vec((ny, nx), raw)?;
        let slice = MaskedArray::from_raw(raw, &mask_rules(&var));

        debug!(
            var = var_name,
            ny,
            nx,
            masked = slice.masked_count(),
            "read first time slice"
        );
        Ok(slice)
    }

    /// Reads a whole 1-D coordinate variable such as `lat` or `lon`
    pub fn coordinate(&self, var_name: &str) -> Result<MaskedArray<Ix1>> {
        let var = self.variable(var_name)?;
        let shape = variable_shape(&var);

        if shape.len() != 1 {
            return Err(EvTempMapError::InvalidShape {
                var: var_name.to_string(),
                expected: "a 1-D coordinate variable".to_string(),
                found: shape,
            });
        }

        let raw: Vec<f64> = var.get_values::<f64, _>(..)?;
        let coordinate = MaskedArray::from_raw(Array1::from(raw), &mask_rules(&var));

        debug!(var = var_name, len = coordinate.shape()[0], "read coordinate");
        Ok(coordinate)
    }

    /// Masking rules of `var_name`, as used by the read methods
    pub fn mask_rules(&self, var_name: &str) -> Result<MaskRules> {
        Ok(mask_rules(&self.variable(var_name)?))
    }
}

impl Drop for GridReader {
    fn drop(&mut self) {
        debug!(path = %self.path.display(), "closing NetCDF file");
    }
}

fn variable_shape(var: &Variable) -> Vec<usize> {
    var.dimensions().iter().map(|d| d.len()).collect()
}

/// Collects the CF masking and packing attributes of a variable
fn mask_rules(var: &Variable) -> MaskRules {
    let first = |name: &str| numeric_attribute(var, name).and_then(|v| v.first().copied());

    let (valid_min, valid_max) = match numeric_attribute(var, "valid_range").as_deref() {
        Some(&[min, max]) => (Some(min), Some(max)),
        _ => (first("valid_min"), first("valid_max")),
    };

    MaskRules {
        storage: storage_type(var),
        fill_value: first("_FillValue"),
        missing_values: numeric_attribute(var, "missing_value").unwrap_or_default(),
        valid_min,
        valid_max,
        scale_factor: first("scale_factor"),
        add_offset: first("add_offset"),
    }
}

fn storage_type(var: &Variable) -> StorageType {
    match var.vartype() {
        NcVariableType::Int(IntType::I8) => StorageType::I8,
        NcVariableType::Int(IntType::U8) => StorageType::U8,
        NcVariableType::Int(IntType::I16) => StorageType::I16,
        NcVariableType::Int(IntType::U16) => StorageType::U16,
        NcVariableType::Int(IntType::I32) => StorageType::I32,
        NcVariableType::Int(IntType::U32) => StorageType::U32,
        NcVariableType::Int(IntType::I64) => StorageType::I64,
        NcVariableType::Int(IntType::U64) => StorageType::U64,
        NcVariableType::Float(FloatType::F32) => StorageType::F32,
        NcVariableType::Float(FloatType::F64) => StorageType::F64,
        _ => StorageType::Other,
    }
}

/// Check if a variable has an attribute with the given name.
/// This avoids HDF5 error spam when looking up optional attributes.
fn has_attr(var: &Variable, name: &str) -> bool {
    var.attributes().any(|attr| attr.name() == name)
}

/// Reads a numeric attribute as `f64` values, scalar or array.
///
/// Absent, unreadable and non-numeric attributes yield `None`.
fn numeric_attribute(var: &Variable, name: &str) -> Option<Vec<f64>> {
    if !has_attr(var, name) {
        return None;
    }

    let value = match var.attribute_value(name)? {
        Ok(value) => value,
        Err(e) => {
            warn!(var = %var.name(), attribute = name, error = %e, "unreadable attribute ignored");
            return None;
        }
    };

    let values = match value {
        AttributeValue::Double(v) => vec![v],
        AttributeValue::Doubles(vs) => vs,
        AttributeValue::Float(v) => vec![f64::from(v)],
        AttributeValue::Floats(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Int(v) => vec![f64::from(v)],
        AttributeValue::Ints(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Short(v) => vec![f64::from(v)],
        AttributeValue::Shorts(vs) => vs.into_iter().map(f64::from).collect(),
        AttributeValue::Schar(v) => vec![f64::from(v)],
        AttributeValue::Uchar(v) => vec![f64::from(v)],
        AttributeValue::Ushort(v) => vec![f64::from(v)],
        AttributeValue::Uint(v) => vec![f64::from(v)],
        other => {
            warn!(
                var = %var.name(),
                attribute = name,
                value = ?other,
                "non-numeric masking attribute ignored"
            );
            return None;
        }
    };

    Some(values)
}
