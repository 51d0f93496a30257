//! Frequency tabulation
//!
//! Assigns every sample value to exactly one class and derives the four
//! frequency series: absolute, cumulative absolute, relative, and
//! percentage (plus the cumulative forms of each).

use freqtab_core::{DataKind, Error, Result, Sample};
use serde::Serialize;

use crate::interval::ClassInterval;

/// One row of the frequency table: a class interval plus its series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyRow {
    /// The class this row describes
    pub interval: ClassInterval,
    /// Number of sample values assigned to this class (Fi)
    pub absolute: usize,
    /// Running sum of `absolute` (Fac)
    pub cumulative_absolute: usize,
    /// absolute / n (Fr)
    pub relative: f64,
    /// Running sum of `relative` (Frac)
    pub cumulative_relative: f64,
    /// relative × 100, rounded to two decimals (F%)
    pub percentage: f64,
    /// Running sum of the *rounded* percentages, itself rounded to two
    /// decimals (Fac%). Accumulating the rounded values is deliberate and
    /// can leave the final entry slightly off 100.00.
    pub cumulative_percentage: f64,
}

/// Assign every sample value to a class and derive the frequency series.
///
/// Values are matched against intervals in order; the first interval whose
/// inclusion rule admits the value wins. For discrete data adjacent
/// classes share a boundary value, so first-match means boundary values
/// land in the lower class, never both.
///
/// The interval construction guarantees every value matches some class;
/// if the assigned total still disagrees with the sample size the
/// tabulation is inconsistent and an error is returned instead of a table
/// that silently lost data.
pub fn tabulate(
    sample: &Sample,
    intervals: &[ClassInterval],
    kind: DataKind,
) -> Result<Vec<FrequencyRow>> {
    if intervals.is_empty() {
        return Err(Error::Inconsistency("no intervals to tabulate into".into()));
    }

    let n = sample.len();
    let mut counts = vec![0usize; intervals.len()];

    for &value in sample.values() {
        if let Some(idx) = intervals.iter().position(|iv| iv.admits(value, kind)) {
            counts[idx] += 1;
        }
    }

    let assigned: usize = counts.iter().sum();
    if assigned != n {
        return Err(Error::frequency_mismatch(assigned, n));
    }

    let n_f = n as f64;
    let mut rows = Vec::with_capacity(intervals.len());
    let mut cumulative_absolute = 0usize;
    let mut cumulative_relative = 0.0f64;
    let mut percentage_sum = 0.0f64;

    for (interval, &absolute) in intervals.iter().zip(&counts) {
        cumulative_absolute += absolute;

        let relative = absolute as f64 / n_f;
        cumulative_relative += relative;

        let percentage = round2(relative * 100.0);
        percentage_sum += percentage;

        rows.push(FrequencyRow {
            interval: interval.clone(),
            absolute,
            cumulative_absolute,
            relative,
            cumulative_relative,
            percentage,
            cumulative_percentage: round2(percentage_sum),
        });
    }

    Ok(rows)
}

/// Round to two decimal places.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
