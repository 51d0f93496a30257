//! The raw sample and its discrete/continuous classification

use std::fmt;

use serde::Serialize;

use crate::{Error, Result};

/// Whether a sample holds only integral values or at least one fractional one.
///
/// The kind drives both interval labeling and the boundary-inclusion rule
/// used during tabulation: discrete classes include both of their bounds,
/// continuous classes are half-open except for the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataKind {
    /// Every value equals its own integer truncation
    Discrete,
    /// At least one value has a fractional part
    Continuous,
}

impl DataKind {
    /// Classify a non-empty slice of finite values.
    pub fn classify(values: &[f64]) -> Self {
        if values.iter().any(|&x| x != x.trunc()) {
            Self::Continuous
        } else {
            Self::Discrete
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discrete => write!(f, "discrete"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

/// An ordered numeric sample, validated at construction.
///
/// A `Sample` is never empty and never contains NaN or infinite values;
/// everything downstream (planner, tabulator, statistics) relies on that.
/// Samples are replaced wholesale, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Create a sample from owned values.
    ///
    /// Rejects empty input and non-finite values.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::empty_input());
        }
        if values.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        Ok(Self { values })
    }

    /// Parse a sample from pasted text.
    ///
    /// Values may be separated by commas, whitespace, or both, matching
    /// what people paste from spreadsheets and notes.
    pub fn parse(text: &str) -> Result<Self> {
        let mut values = Vec::new();
        for token in text.split(|c: char| c == ',' || c.is_whitespace()) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let value: f64 = token
                .parse()
                .map_err(|_| Error::InvalidToken(token.to_string()))?;
            values.push(value);
        }
        Self::new(values)
    }

    /// The values, in entry order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values (always ≥ 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Total range (max − min).
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Discrete/continuous classification of this sample.
    pub fn kind(&self) -> DataKind {
        DataKind::classify(&self.values)
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sample(n={}, range=[{}, {}], {})",
            self.len(),
            self.min(),
            self.max(),
            self.kind()
        )
    }
}
