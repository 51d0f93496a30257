//! Grouped frequency-distribution tables from raw numeric samples
//!
//! `freqtab` takes a pasted list of numbers, classifies it as discrete or
//! continuous, picks a class count with Sturges' rule, builds contiguous
//! class intervals, tallies the absolute/relative/cumulative/percentage
//! frequency series, and computes the usual descriptive statistics. On
//! top of the table it produces the histogram geometry and ogive
//! (cumulative-frequency) series a plotting layer needs, plus CSV export.
//!
//! The workspace is split by concern:
//!
//! - [`freqtab_core`] — error type, validated [`Sample`], discrete/continuous
//!   classification
//! - [`freqtab_table`] — class planning, interval construction, tabulation
//! - [`freqtab_stats`] — descriptive statistics
//! - [`freqtab_plot`] — histogram/ogive series, CSV export, and the
//!   [`Session`] that owns the last generated table
//!
//! # Examples
//!
//! ## One-shot table generation
//!
//! ```rust
//! use freqtab::{frequency_table, Sample};
//!
//! let table = frequency_table(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
//! assert_eq!(table.len(), 4); // Sturges: round(1 + 3.322*log10(8)) = 4
//! assert_eq!(table.statistics().mode, Some(vec![3.0]));
//!
//! for row in table.rows() {
//!     println!("{:<12} Fi={:<3} Fac={:<3} F%={:.2}",
//!              row.interval.label, row.absolute, row.cumulative_absolute, row.percentage);
//! }
//! ```
//!
//! ## Session-driven use (paste, generate, plot, export)
//!
//! ```rust
//! use freqtab::{OgiveMode, Session};
//!
//! let mut session = Session::new();
//! session.generate_from_text("1.5, 2.7 3.1, 4.4 5.9").unwrap();
//!
//! let ogive = session.ogive(OgiveMode::Percentage).unwrap();
//! assert_eq!(ogive.points.last().unwrap().1, 100.0);
//! let csv = session.export_csv().unwrap();
//! assert!(csv.contains("1.50 |- 2.97"));
//! ```

pub use freqtab_core as core;
pub use freqtab_plot as plot;
pub use freqtab_stats as stats;
pub use freqtab_table as table;

// The types most callers need, re-exported flat.
pub use freqtab_core::{DataKind, Error, Result, Sample};
pub use freqtab_plot::{HistogramData, OgiveMode, OgiveSeries, Session};
pub use freqtab_stats::Statistics;
pub use freqtab_table::{
    ClassInterval, ClassPlan, FrequencyRow, FrequencyTable, DEFAULT_PRECISION,
};

/// Build a table from raw values at the default decimal precision.
pub fn frequency_table(values: &[f64]) -> Result<FrequencyTable> {
    frequency_table_with_precision(values, DEFAULT_PRECISION)
}

/// Build a table from raw values at an explicit decimal precision (0..=10).
pub fn frequency_table_with_precision(values: &[f64], precision: u32) -> Result<FrequencyTable> {
    let sample = Sample::new(values.to_vec())?;
    FrequencyTable::generate(&sample, precision)
}
