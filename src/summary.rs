//! Quick summaries of extracted grids and masks

use ndarray::Array2;
use std::fmt;

/// Min/mean/max over the finite cells of a grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridSummary {
    pub shape: (usize, usize),
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub finite_cells: usize,
}

impl GridSummary {
    /// Summarises `grid`; statistics are NaN when no cell is finite
    pub fn from_grid(grid: &Array2<f64>) -> Self {
        let finite: Vec<f64> = grid.iter().copied().filter(|v| v.is_finite()).collect();

        let (min, max, mean) = if finite.is_empty() {
            (f64::NAN, f64::NAN, f64::NAN)
        } else {
            let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
            let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = finite.iter().sum::<f64>() / finite.len() as f64;
            (min, max, mean)
        };

        Self {
            shape: grid.dim(),
            min,
            max,
            mean,
            finite_cells: finite.len(),
        }
    }
}

impl fmt::Display for GridSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   Shape: ({} × {})", self.shape.0, self.shape.1)?;
        writeln!(f, "   Min: {:.2}", self.min)?;
        writeln!(f, "   Max: {:.2}", self.max)?;
        writeln!(f, "   Mean: {:.2}", self.mean)?;
        write!(
            f,
            "   Finite cells: {} / {}",
            self.finite_cells,
            self.shape.0 * self.shape.1
        )
    }
}

/// Masked and unmasked cell counts of a land/ocean mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSummary {
    pub shape: (usize, usize),
    pub masked: usize,
    pub unmasked: usize,
}

impl MaskSummary {
    pub fn from_mask(mask: &Array2<bool>) -> Self {
        let masked = mask.iter().filter(|&&m| m).count();
        Self {
            shape: mask.dim(),
            masked,
            unmasked: mask.len() - masked,
        }
    }
}

impl fmt::Display for MaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   Shape: ({} × {})", self.shape.0, self.shape.1)?;
        writeln!(f, "   Masked cells: {}", self.masked)?;
        write!(f, "   Unmasked cells: {}", self.unmasked)
    }
}
