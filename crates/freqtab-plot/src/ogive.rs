//! Ogive (cumulative-frequency curve) series
//!
//! Produces the (x, y) point series for an ogive: x runs over the class
//! upper bounds, y over the cumulative frequency, with an implicit
//! (first lower bound, 0) origin so the curve starts on the axis.

use freqtab_core::{Result, Sample};
use freqtab_table::{build_intervals, sturges_count, tabulate, ClassPlan, FrequencyTable};
use serde::Serialize;

/// Which cumulative series the ogive plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OgiveMode {
    /// Cumulative absolute frequency (ends at n)
    Absolute,
    /// Cumulative percentage of the sample (ends at 100)
    Percentage,
}

/// A connected-line ogive series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OgiveSeries {
    /// (x, y) points: the origin, then one point per class boundary
    pub points: Vec<(f64, f64)>,
    /// Which cumulative series `y` carries
    pub mode: OgiveMode,
}

impl OgiveSeries {
    /// Build the series from a generated table's classes.
    pub fn from_table(table: &FrequencyTable, mode: OgiveMode) -> Self {
        let n = table.n() as f64;
        let mut points = Vec::with_capacity(table.len() + 1);

        if let Some(first) = table.rows().first() {
            points.push((first.interval.lower, 0.0));
        }
        for row in table.rows() {
            let y = match mode {
                OgiveMode::Absolute => row.cumulative_absolute as f64,
                OgiveMode::Percentage => row.cumulative_absolute as f64 / n * 100.0,
            };
            points.push((row.interval.upper, y));
        }

        Self { points, mode }
    }

    /// Build the series directly from an ungrouped sample.
    ///
    /// Bins the raw values into `classes` equal-width bins (Sturges' count
    /// when `None`) using the exact width, so the bin edges hit the sample
    /// maximum dead on without the planner's decimal rounding.
    pub fn from_raw(sample: &Sample, classes: Option<usize>, mode: OgiveMode) -> Result<Self> {
        let (min, max, n) = (sample.min(), sample.max(), sample.len());
        let kind = sample.kind();

        let count = if max == min {
            1
        } else {
            classes.unwrap_or_else(|| sturges_count(n)).max(1)
        };
        let width = (max - min) / count as f64;

        let bin_plan = ClassPlan {
            count,
            raw_width: width,
            width,
            precision: 2,
        };
        let intervals = build_intervals(min, max, &bin_plan, kind);
        let rows = tabulate(sample, &intervals, kind)?;

        let n_f = n as f64;
        let mut points = Vec::with_capacity(count + 1);
        points.push((min, 0.0));
        for row in &rows {
            let y = match mode {
                OgiveMode::Absolute => row.cumulative_absolute as f64,
                OgiveMode::Percentage => row.cumulative_absolute as f64 / n_f * 100.0,
            };
            points.push((row.interval.upper, y));
        }

        Ok(Self { points, mode })
    }
}
