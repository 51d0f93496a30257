//! The generated table: one atomic result per "generate" action
//!
//! [`FrequencyTable::generate`] runs the whole Classifier → Planner →
//! Builder → Tabulator → Statistics pipeline synchronously. A failure at
//! any stage yields an `Err` and no table; there is no partial result.

use freqtab_core::{DataKind, Result, Sample};
use freqtab_stats::Statistics;
use serde::Serialize;
use tracing::debug;

use crate::frequency::{tabulate, FrequencyRow};
use crate::interval::build_intervals;
use crate::plan::ClassPlan;

/// Totals line renderers append below the last class row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableTotals {
    /// Sample size (total of the absolute series)
    pub absolute: usize,
    /// Total of the relative series
    pub relative: f64,
    /// Total of the percentage series
    pub percentage: f64,
}

/// A complete grouped frequency-distribution table.
///
/// Immutable once generated; regenerating from an identical sample and
/// precision produces an identical table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    kind: DataKind,
    plan: ClassPlan,
    rows: Vec<FrequencyRow>,
    statistics: Statistics,
}

impl FrequencyTable {
    /// Run the full derivation pipeline for one sample.
    pub fn generate(sample: &Sample, precision: u32) -> Result<Self> {
        let kind = sample.kind();
        let (min, max, n) = (sample.min(), sample.max(), sample.len());
        debug!(n, %kind, min, max, "classified sample");

        let plan = ClassPlan::sturges(min, max, n, precision)?;
        debug!(
            k = plan.count,
            width = plan.width,
            raw_width = plan.raw_width,
            "planned classes"
        );

        let intervals = build_intervals(min, max, &plan, kind);
        let rows = tabulate(sample, &intervals, kind)?;
        debug!(classes = rows.len(), "tabulated frequencies");

        let statistics = Statistics::describe(sample, plan.count, plan.width);

        Ok(Self {
            kind,
            plan,
            rows,
            statistics,
        })
    }

    /// Discrete/continuous classification the table was built under.
    pub fn kind(&self) -> DataKind {
        self.kind
    }

    /// The class plan (k, widths, precision).
    pub fn plan(&self) -> &ClassPlan {
        &self.plan
    }

    /// The class rows, in class order.
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A generated table always has at least one class.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Descriptive statistics of the underlying sample.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Sample size.
    pub fn n(&self) -> usize {
        self.statistics.n
    }

    /// (lower, upper) pairs for each class, in order.
    pub fn class_bounds(&self) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .map(|r| (r.interval.lower, r.interval.upper))
            .collect()
    }

    /// Absolute frequency per class, in order.
    pub fn absolute_counts(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.absolute).collect()
    }

    /// The synthetic totals row (n, 1.0, 100.0).
    pub fn totals(&self) -> TableTotals {
        TableTotals {
            absolute: self.statistics.n,
            relative: 1.0,
            percentage: 100.0,
        }
    }
}
