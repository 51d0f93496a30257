//! Class planning via Sturges' rule
//!
//! Decides how many classes a table gets and how wide each one is. The
//! width is rounded *up* at the configured decimal precision so the
//! accumulated class bounds never fall short of the sample maximum.

use freqtab_core::{Error, Result};
use serde::Serialize;

/// Largest supported decimal precision for class widths and labels.
pub const MAX_PRECISION: u32 = 10;

/// Default decimal precision when the caller does not pick one.
pub const DEFAULT_PRECISION: u32 = 2;

/// The class layout chosen for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClassPlan {
    /// Number of classes k
    pub count: usize,
    /// (max − min) / k before rounding
    pub raw_width: f64,
    /// Raw width rounded up at `precision` decimals
    pub width: f64,
    /// Decimal precision used for rounding and labels
    pub precision: u32,
}

impl ClassPlan {
    /// Plan classes for a sample with Sturges' rule:
    /// k = round(1 + 3.322·log10(n)).
    ///
    /// A zero-range sample (all values identical, including n = 1)
    /// collapses to a single class of zero width rather than k zero-width
    /// classes.
    pub fn sturges(min: f64, max: f64, n: usize, precision: u32) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(Error::InvalidPrecision(precision));
        }
        if n == 0 {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }

        if max == min {
            return Ok(Self {
                count: 1,
                raw_width: 0.0,
                width: 0.0,
                precision,
            });
        }

        let count = sturges_count(n);
        let raw_width = (max - min) / count as f64;

        // Round up, never to nearest: the last accumulated bound must
        // reach at least `max`.
        let factor = 10f64.powi(precision as i32);
        let width = (raw_width * factor).ceil() / factor;

        Ok(Self {
            count,
            raw_width,
            width,
            precision,
        })
    }
}

/// Sturges' class count for a sample of size n ≥ 1.
pub fn sturges_count(n: usize) -> usize {
    let k = (1.0 + 3.322 * (n as f64).log10()).round();
    (k as usize).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sturges_count() {
        assert_eq!(sturges_count(1), 1);
        assert_eq!(sturges_count(5), 3);
        assert_eq!(sturges_count(8), 4);
        assert_eq!(sturges_count(100), 8);
        assert_eq!(sturges_count(1000), 11);
    }

    #[test]
    fn test_plan_rounds_width_up() {
        // n=5 -> k=3; raw width 4.4/3 = 1.4666... rounds up to 1.47
        let plan = ClassPlan::sturges(1.5, 5.9, 5, 2).unwrap();
        assert_eq!(plan.count, 3);
        assert_relative_eq!(plan.raw_width, 4.4 / 3.0);
        assert_relative_eq!(plan.width, 1.47);
    }

    #[test]
    fn test_plan_exact_width_unchanged() {
        // raw width 1.0 is already exact at two decimals
        let plan = ClassPlan::sturges(1.0, 5.0, 8, 2).unwrap();
        assert_eq!(plan.count, 4);
        assert_relative_eq!(plan.width, 1.0);
    }

    #[test]
    fn test_plan_precision_zero() {
        let plan = ClassPlan::sturges(0.0, 10.0, 8, 0).unwrap();
        // raw 2.5 rounds up to 3 at zero decimals
        assert_relative_eq!(plan.width, 3.0);
    }

    #[test]
    fn test_zero_range_collapses_to_single_class() {
        let plan = ClassPlan::sturges(7.0, 7.0, 4, 2).unwrap();
        assert_eq!(plan.count, 1);
        assert_relative_eq!(plan.width, 0.0);
    }

    #[test]
    fn test_single_sample_plan() {
        let plan = ClassPlan::sturges(42.0, 42.0, 1, 2).unwrap();
        assert_eq!(plan.count, 1);
    }

    #[test]
    fn test_rejects_bad_precision() {
        assert!(matches!(
            ClassPlan::sturges(0.0, 1.0, 10, 11),
            Err(Error::InvalidPrecision(11))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            ClassPlan::sturges(0.0, 1.0, 0, 2),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_width_covers_max() {
        // k * width must reach max even when raw width has a long tail
        for &(min, max, n) in &[(0.0, 1.0, 7), (1.5, 5.9, 5), (-3.0, 14.0, 50)] {
            let plan = ClassPlan::sturges(min, max, n, 2).unwrap();
            assert!(min + plan.width * plan.count as f64 >= max - 1e-9);
        }
    }
}
