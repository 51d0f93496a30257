//! Grouped frequency-distribution tables
//!
//! This crate is the tabulation engine: it plans a class count with
//! Sturges' rule, materializes contiguous class intervals over the sample
//! range, assigns every value to exactly one class, and derives the
//! absolute/relative/cumulative/percentage frequency series.
//!
//! The boundary-inclusion rule follows the sample's classification:
//! discrete classes include both bounds (shared boundary values land in
//! the lower class via first-match), continuous classes are half-open
//! `[lower, upper)` except the final one, which is closed so the sample
//! maximum is always captured.
//!
//! # Examples
//!
//! ```rust
//! use freqtab_core::Sample;
//! use freqtab_table::FrequencyTable;
//!
//! let sample = Sample::new(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
//! let table = FrequencyTable::generate(&sample, 2).unwrap();
//!
//! assert_eq!(table.len(), 4); // Sturges: k = round(1 + 3.322*log10(8)) = 4
//! let total: usize = table.rows().iter().map(|r| r.absolute).sum();
//! assert_eq!(total, 8);
//! for row in table.rows() {
//!     println!("{}: Fi={} Fac={}", row.interval, row.absolute, row.cumulative_absolute);
//! }
//! ```

pub mod frequency;
pub mod interval;
pub mod plan;
pub mod table;

pub use frequency::{tabulate, FrequencyRow};
pub use interval::{build_intervals, ClassInterval};
pub use plan::{sturges_count, ClassPlan, DEFAULT_PRECISION, MAX_PRECISION};
pub use table::{FrequencyTable, TableTotals};

pub use freqtab_core::{DataKind, Error, Result, Sample};
