//! Descriptive statistics for freqtab samples
//!
//! Computes the classical summaries (mean, median, mode, population
//! variance, standard deviation, coefficient of variation) of a raw
//! sample. Undefined statistics are `Option`s, never sentinels: a sample
//! with no repeated value has no mode, and a zero mean leaves the
//! coefficient of variation undefined.
//!
//! # Examples
//!
//! ```rust
//! use freqtab_core::Sample;
//! use freqtab_stats::Statistics;
//!
//! let sample = Sample::new(vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]).unwrap();
//! let stats = Statistics::describe(&sample, 4, 1.0);
//! assert_eq!(stats.mode, Some(vec![3.0]));
//! assert_eq!(stats.n, 8);
//! ```

pub mod descriptive;

pub use descriptive::Statistics;
