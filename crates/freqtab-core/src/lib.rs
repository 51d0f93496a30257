//! Shared foundation for the freqtab crates
//!
//! This crate holds the pieces every other freqtab crate needs: the unified
//! [`Error`] type, the validated [`Sample`] container, and the
//! discrete/continuous [`DataKind`] classifier.
//!
//! # Examples
//!
//! ```rust
//! use freqtab_core::{DataKind, Sample};
//!
//! let sample = Sample::parse("1, 2 3, 4.5").unwrap();
//! assert_eq!(sample.len(), 4);
//! assert_eq!(sample.kind(), DataKind::Continuous);
//! ```

pub mod error;
pub mod sample;

pub use error::{Error, Result};
pub use sample::{DataKind, Sample};
