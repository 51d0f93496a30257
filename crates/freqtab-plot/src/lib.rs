//! Renderer-facing output for freqtab tables
//!
//! This crate sits at the presentation boundary: it turns a generated
//! [`FrequencyTable`](freqtab_table::FrequencyTable) into the plain data a
//! chart or export layer consumes. No drawing or UI lives here — just
//! histogram bar geometry, ogive point series, CSV rows, and the
//! [`Session`] object that owns the "last generated table" state.
//!
//! # Examples
//!
//! ```rust
//! use freqtab_plot::{OgiveMode, Session};
//!
//! let mut session = Session::new();
//! session.generate_from_text("1.5, 2.7, 3.1, 4.4, 5.9").unwrap();
//!
//! let hist = session.histogram_data().unwrap();
//! assert!(matches!(hist, freqtab_plot::HistogramData::Continuous { .. }));
//!
//! let ogive = session.ogive(OgiveMode::Percentage).unwrap();
//! assert_eq!(ogive.points.first().unwrap().1, 0.0);
//!
//! let csv = session.export_csv().unwrap();
//! assert!(csv.starts_with("class,interval"));
//! ```
//!
//! Reading from a session that has not generated anything yet fails with
//! [`Error::NoTable`](freqtab_core::Error::NoTable) rather than producing
//! an empty chart.

pub mod export;
pub mod histogram;
pub mod ogive;
pub mod session;

pub use export::{csv_string, write_csv};
pub use histogram::HistogramData;
pub use ogive::{OgiveMode, OgiveSeries};
pub use session::Session;

pub use freqtab_core::{Error, Result};
