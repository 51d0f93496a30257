//! Descriptive statistics for a raw sample
//!
//! Location, spread, and shape summaries computed directly from the
//! ungrouped values. Two choices are fixed here rather than left implicit:
//! the variance divisor is n (population variance), and mode reports every
//! value tied at the highest multiplicity, or `None` when nothing repeats.

use std::fmt;

use freqtab_core::Sample;
use serde::Serialize;

/// Summary statistics for one sample.
///
/// `mode` and `coefficient_of_variation` are `None` when undefined (no
/// repeated value, mean of zero) instead of carrying a numeric sentinel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    /// Sample size
    pub n: usize,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// max − min
    pub range: f64,
    /// Number of classes in the table built from this sample
    pub class_count: usize,
    /// Rounded class width used by that table
    pub class_width: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Middle value of the sorted sample (average of the two middle values
    /// for even n)
    pub median: f64,
    /// All values tied at the highest multiplicity, ascending; `None` when
    /// no value occurs more than once
    pub mode: Option<Vec<f64>>,
    /// Population variance (divisor n)
    pub variance: f64,
    /// Square root of the population variance
    pub std_dev: f64,
    /// std_dev / mean × 100; `None` when the mean is zero
    pub coefficient_of_variation: Option<f64>,
}

impl Statistics {
    /// Compute all summaries for a sample.
    ///
    /// `class_count` and `class_width` come from the class plan the caller
    /// built for the same sample; they are carried here so one record
    /// describes the whole table.
    pub fn describe(sample: &Sample, class_count: usize, class_width: f64) -> Self {
        let values = sample.values();
        let n = values.len();
        let n_f = n as f64;

        let min = sample.min();
        let max = sample.max();
        let mean = values.iter().sum::<f64>() / n_f;

        let variance = values
            .iter()
            .map(|&x| {
                let diff = x - mean;
                diff * diff
            })
            .sum::<f64>()
            / n_f;
        let std_dev = variance.sqrt();

        let coefficient_of_variation = if mean == 0.0 {
            None
        } else {
            Some(std_dev / mean * 100.0)
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        Self {
            n,
            min,
            max,
            range: max - min,
            class_count,
            class_width,
            mean,
            median: median_of_sorted(&sorted),
            mode: mode_of_sorted(&sorted),
            variance,
            std_dev,
            coefficient_of_variation,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistics(n={}, mean={:.4}, median={:.4}, sd={:.4})",
            self.n, self.mean, self.median, self.std_dev
        )
    }
}

/// Median of an already-sorted non-empty slice.
fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Every value tied at the highest multiplicity, or `None` when the highest
/// multiplicity is 1.
///
/// Run-length scan over the sorted values; exact float equality is
/// deliberate, repeated entries of a hand-entered sample are bit-identical.
fn mode_of_sorted(sorted: &[f64]) -> Option<Vec<f64>> {
    let mut best_count = 1usize;
    let mut modes: Vec<f64> = Vec::new();

    let mut i = 0;
    while i < sorted.len() {
        let value = sorted[i];
        let mut count = 1;
        while i + count < sorted.len() && sorted[i + count] == value {
            count += 1;
        }
        if count > best_count {
            best_count = count;
            modes.clear();
            modes.push(value);
        } else if count == best_count && best_count > 1 {
            modes.push(value);
        }
        i += count;
    }

    if best_count > 1 {
        Some(modes)
    } else {
        None
    }
}
