//! Score zones for categorical map legends
//!
//! A zone is a fixed-width slice of the score range `[0, 100]`, labelled
//! `"<lower> - <upper>"`. The lower bound is inclusive and the upper bound
//! exclusive, except for the final zone which also holds a score of exactly
//! 100. Widths that do not divide 100 evenly produce a narrower final zone
//! instead of one reaching past 100.

use crate::errors::{EvTempMapError, Result};
use std::fmt;

/// Zone width used when none is given
pub const DEFAULT_BIN_SIZE: f64 = 10.0;

/// Upper end of the score range
pub const MAX_SCORE: f64 = 100.0;

/// A labelled score interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    lower: f64,
    upper: f64,
}

impl Zone {
    /// Finds the zone of width `bin_size` holding `score`.
    ///
    /// Both arguments are checked to be numbers before either range is
    /// checked. `score` must lie in `[0, 100]` and `bin_size` in `(0, 100]`.
    pub fn for_score(score: f64, bin_size: f64) -> Result<Self> {
        if score.is_nan() {
            return Err(EvTempMapError::invalid_argument(
                "Score needs to be a number!",
            ));
        }
        if bin_size.is_nan() {
            return Err(EvTempMapError::invalid_argument(
                "Bin size needs to be a number!",
            ));
        }
        if !(0.0..=MAX_SCORE).contains(&score) {
            return Err(EvTempMapError::invalid_argument(format!(
                "Score {} is out of valid range [0, 100]",
                score
            )));
        }
        if !(bin_size > 0.0 && bin_size <= MAX_SCORE) {
            return Err(EvTempMapError::invalid_argument(format!(
                "Bin size {} is out of valid range (0, 100]",
                bin_size
            )));
        }

        let (lower, upper) = if score == MAX_SCORE {
            let last = ((MAX_SCORE / bin_size).ceil() - 1.0) * bin_size;
            (last, MAX_SCORE)
        } else {
            let lower = (score / bin_size).floor() * bin_size;
            let upper = ((score + bin_size) / bin_size).floor() * bin_size;
            (lower, upper.min(MAX_SCORE))
        };

        // Widths too small to resolve against the score overflow or collapse
        if !(lower.is_finite() && lower < upper) {
            return Err(EvTempMapError::invalid_argument(format!(
                "Bin size {} is too small to bin score {}",
                bin_size, score
            )));
        }

        // -0.0 is a valid score and must label like 0.0
        Ok(Self {
            lower: lower + 0.0,
            upper,
        })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Whether `score` falls in this zone, counting 100 into the final zone
    pub fn contains(&self, score: f64) -> bool {
        (self.lower <= score && score < self.upper)
            || (score == MAX_SCORE && self.upper == MAX_SCORE)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} - {:.1}", self.lower, self.upper)
    }
}

/// Returns the label of the zone of width `bin_size` holding `score`.
///
/// ```
/// use ev_temp_map::zone::{get_zone, DEFAULT_BIN_SIZE};
///
/// assert_eq!(get_zone(50.0, DEFAULT_BIN_SIZE).unwrap(), "50.0 - 60.0");
/// assert_eq!(get_zone(99.99, 12.0).unwrap(), "96.0 - 100.0");
/// ```
pub fn get_zone(score: f64, bin_size: f64) -> Result<String> {
    Zone::for_score(score, bin_size).map(|zone| zone.to_string())
}

/// Parses a textual score or bin size.
///
/// Text that is not a number is rejected here, before any range check.
pub fn parse_score(text: &str) -> Result<f64> {
    text.trim().parse::<f64>().map_err(|_| {
        EvTempMapError::invalid_argument(format!("'{}' needs to be a number!", text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_bounds() {
        let zone = Zone::for_score(42.0, 10.0).unwrap();
        assert_eq!(zone.lower(), 40.0);
        assert_eq!(zone.upper(), 50.0);
        assert!(zone.contains(40.0));
        assert!(zone.contains(49.999));
        assert!(!zone.contains(50.0));
    }

    #[test]
    fn test_final_zone_holds_max_score() {
        let zone = Zone::for_score(100.0, 10.0).unwrap();
        assert_eq!(zone, Zone::for_score(95.0, 10.0).unwrap());
        assert!(zone.contains(100.0));

        let whole = Zone::for_score(100.0, 100.0).unwrap();
        assert_eq!(whole.to_string(), "0.0 - 100.0");
    }

    #[test]
    fn test_uneven_width_clamps_top() {
        let zone = Zone::for_score(97.0, 12.0).unwrap();
        assert_eq!(zone.to_string(), "96.0 - 100.0");
        assert_eq!(Zone::for_score(100.0, 12.0).unwrap(), zone);
    }

    #[test]
    fn test_negative_zero_labels_as_zero() {
        let zone = Zone::for_score(-0.0, 10.0).unwrap();
        assert!(zone.lower().is_sign_positive());
        assert_eq!(zone.to_string(), "0.0 - 10.0");
    }

    #[test]
    fn test_unresolvable_bin_size_is_rejected() {
        for score in [50.0, 100.0] {
            let err = Zone::for_score(score, 5e-324).unwrap_err();
            assert!(err.to_string().contains("too small"));
        }
        assert!(Zone::for_score(50.0, 1e-300).is_err());
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score(" 3.1415 ").unwrap(), 3.1415);
        assert!(parse_score("not_a_number").is_err());
    }
}
