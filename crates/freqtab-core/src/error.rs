//! Error types for frequency-table construction
//!
//! Provides a unified error type for all freqtab crates.

use thiserror::Error;

/// Core error type for frequency-table operations
#[derive(Error, Debug)]
pub enum Error {
    /// Sample construction received no values
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    /// Sample construction received NaN or infinite values
    #[error("Invalid sample: {context} contains NaN or infinite values")]
    NonFinite { context: String },

    /// Text input contained a token that does not parse as a number
    #[error("Invalid token: {0:?} is not a number")]
    InvalidToken(String),

    /// Decimal precision outside the supported range
    #[error("Invalid precision: {0} (must be in 0..=10)")]
    InvalidPrecision(u32),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Tabulated frequencies do not account for every sample value
    #[error("Inconsistent tabulation: {0}")]
    Inconsistency(String),

    /// A plot or export was requested before any table was generated
    #[error("No table generated yet")]
    NoTable,

    /// Writing an export stream failed
    #[error("Export error: {0}")]
    Export(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::EmptySample
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite {
            context: context.to_string(),
        }
    }

    /// Create an error for a frequency total that does not match the sample size
    pub fn frequency_mismatch(assigned: usize, n: usize) -> Self {
        Self::Inconsistency(format!(
            "assigned frequencies sum to {assigned}, sample size is {n}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptySample;
        assert_eq!(
            err.to_string(),
            "Empty sample: at least one value is required"
        );

        let err = Error::non_finite("pasted data");
        assert_eq!(
            err.to_string(),
            "Invalid sample: pasted data contains NaN or infinite values"
        );

        let err = Error::InvalidToken("abc".to_string());
        assert_eq!(err.to_string(), "Invalid token: \"abc\" is not a number");

        let err = Error::InvalidPrecision(11);
        assert_eq!(err.to_string(), "Invalid precision: 11 (must be in 0..=10)");

        let err = Error::InsufficientData {
            expected: 1,
            actual: 0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 1 samples, got 0"
        );

        let err = Error::NoTable;
        assert_eq!(err.to_string(), "No table generated yet");
    }

    #[test]
    fn test_frequency_mismatch_helper() {
        let err = Error::frequency_mismatch(7, 8);
        match &err {
            Error::Inconsistency(msg) => {
                assert!(msg.contains('7'));
                assert!(msg.contains('8'));
            }
            _ => panic!("Wrong error type"),
        }
        assert_eq!(
            err.to_string(),
            "Inconsistent tabulation: assigned frequencies sum to 7, sample size is 8"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function(succeed: bool) -> Result<i32> {
            if succeed {
                Ok(42)
            } else {
                Err(Error::NoTable)
            }
        }

        assert_eq!(test_function(true).unwrap(), 42);
        assert!(test_function(false).is_err());
    }
}
