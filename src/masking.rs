//! Masked arrays and the CF masking rules applied when reading variables
//!
//! NetCDF variables flag missing cells in-band: a `_FillValue`, a list of
//! `missing_value`s, or a `valid_min`/`valid_max`/`valid_range` window. Packed
//! variables additionally carry `scale_factor` and `add_offset`. [`MaskRules`]
//! captures those attributes for one variable and [`MaskedArray`] keeps the
//! decoded data next to a boolean mask of the same shape.

use ndarray::{Array, Dimension, Zip};

/// Default fill value libnetcdf writes into unwritten `NC_FLOAT` cells
pub const NC_FILL_FLOAT: f32 = 9.969_209_968_386_869e36;

/// Default fill value libnetcdf writes into unwritten `NC_DOUBLE` cells
pub const NC_FILL_DOUBLE: f64 = 9.969_209_968_386_869e36;

pub const NC_FILL_SHORT: i16 = -32767;
pub const NC_FILL_USHORT: u16 = 65535;
pub const NC_FILL_INT: i32 = -2_147_483_647;
pub const NC_FILL_UINT: u32 = 4_294_967_295;
pub const NC_FILL_INT64: i64 = -9_223_372_036_854_775_806;
pub const NC_FILL_UINT64: u64 = 18_446_744_073_709_551_614;

/// On-disk type of a variable, as far as default fills are concerned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    #[default]
    F64,
    /// Characters, strings and user defined types
    Other,
}

impl StorageType {
    /// The libnetcdf default fill of this type.
    ///
    /// Byte types have none: their whole value range is commonly used as
    /// data, so unwritten byte cells are not treated as missing.
    pub fn default_fill(self) -> Option<f64> {
        match self {
            Self::I16 => Some(f64::from(NC_FILL_SHORT)),
            Self::U16 => Some(f64::from(NC_FILL_USHORT)),
            Self::I32 => Some(f64::from(NC_FILL_INT)),
            Self::U32 => Some(f64::from(NC_FILL_UINT)),
            Self::I64 => Some(NC_FILL_INT64 as f64),
            Self::U64 => Some(NC_FILL_UINT64 as f64),
            Self::F32 => Some(f64::from(NC_FILL_FLOAT)),
            Self::F64 => Some(NC_FILL_DOUBLE),
            Self::I8 | Self::U8 | Self::Other => None,
        }
    }
}

/// Masking and unpacking attributes of a single variable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskRules {
    /// Type the variable is stored as
    pub storage: StorageType,
    /// `_FillValue`, in stored (packed) units
    pub fill_value: Option<f64>,
    /// Every value listed in `missing_value`
    pub missing_values: Vec<f64>,
    /// Lower bound from `valid_range[0]` or `valid_min`
    pub valid_min: Option<f64>,
    /// Upper bound from `valid_range[1]` or `valid_max`
    pub valid_max: Option<f64>,
    pub scale_factor: Option<f64>,
    pub add_offset: Option<f64>,
}

impl MaskRules {
    /// Whether a stored value marks a missing cell.
    ///
    /// Without an explicit `_FillValue` the libnetcdf default fill of the
    /// storage type is used.
    pub fn is_masked(&self, raw: f64) -> bool {
        if raw.is_nan() {
            return true;
        }

        let is_fill = self
            .fill_value
            .or(self.storage.default_fill())
            .is_some_and(|fill| raw == fill);

        is_fill
            || self.missing_values.iter().any(|&missing| raw == missing)
            || self.valid_min.is_some_and(|min| raw < min)
            || self.valid_max.is_some_and(|max| raw > max)
    }

    /// Converts a stored value to its physical value
    pub fn unpack(&self, raw: f64) -> f64 {
        match (self.scale_factor, self.add_offset) {
            (None, None) => raw,
            (scale, offset) => raw * scale.unwrap_or(1.0) + offset.unwrap_or(0.0),
        }
    }

    /// The variable's own fill value: `_FillValue` or the libnetcdf default
    pub fn default_fill(&self) -> f64 {
        self.fill_value
            .or(self.storage.default_fill())
            .unwrap_or(NC_FILL_DOUBLE)
    }
}

/// Data array paired with a boolean mask of identical shape
#[derive(Debug, Clone, PartialEq)]
pub struct MaskedArray<D: Dimension> {
    data: Array<f64, D>,
    mask: Array<bool, D>,
}

impl<D: Dimension> MaskedArray<D> {
    /// Builds a masked array from stored values, masking then unpacking them.
    ///
    /// Masked cells keep their stored value untouched.
    pub fn from_raw(raw: Array<f64, D>, rules: &MaskRules) -> Self {
        let mask = raw.mapv(|value| rules.is_masked(value));
        let mut data = raw;
        Zip::from(&mut data).and(&mask).for_each(|value, &masked| {
            if !masked {
                *value = rules.unpack(*value);
            }
        });

        Self { data, mask }
    }

    pub fn data(&self) -> &Array<f64, D> {
        &self.data
    }

    /// `true` where the cell is missing
    pub fn mask(&self) -> &Array<bool, D> {
        &self.mask
    }

    pub fn into_mask(self) -> Array<bool, D> {
        self.mask
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn masked_count(&self) -> usize {
        self.mask.iter().filter(|&&masked| masked).count()
    }

    /// Copy of the data with every masked cell replaced by `fill`
    pub fn filled(&self, fill: f64) -> Array<f64, D> {
        let mut filled = self.data.clone();
        Zip::from(&mut filled).and(&self.mask).for_each(|value, &masked| {
            if masked {
                *value = fill;
            }
        });
        filled
    }
}
