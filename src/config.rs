//! Extraction defaults gathered in one place

use crate::temperature::{DEFAULT_FILL_VALUE, DEFAULT_TEMPERATURE_VAR};
use crate::zone::DEFAULT_BIN_SIZE;

/// Settings shared by the readers and the zone binner
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionConfig {
    /// Temperature-like variable to read
    pub var_name: String,
    /// Value for masked temperature cells
    pub fill_value: f64,
    /// Zone width
    pub bin_size: f64,
}

impl ExtractionConfig {
    pub fn with_var_name(mut self, var_name: impl Into<String>) -> Self {
        self.var_name = var_name.into();
        self
    }

    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }

    pub fn with_bin_size(mut self, bin_size: f64) -> Self {
        self.bin_size = bin_size;
        self
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            var_name: DEFAULT_TEMPERATURE_VAR.to_string(),
            fill_value: DEFAULT_FILL_VALUE,
            bin_size: DEFAULT_BIN_SIZE,
        }
    }
}
