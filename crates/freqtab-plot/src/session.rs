//! Session: the owned "last generated table" state
//!
//! Replaces the hidden global a UI would otherwise keep. A session holds
//! the most recent sample and its generated table; `generate` replaces
//! both wholesale, and every read of an empty session fails with the
//! distinct [`Error::NoTable`] precondition error instead of producing an
//! empty chart or file.

use freqtab_core::{Error, Result, Sample};
use freqtab_table::{FrequencyTable, DEFAULT_PRECISION, MAX_PRECISION};
use tracing::debug;

use crate::export;
use crate::histogram::HistogramData;
use crate::ogive::{OgiveMode, OgiveSeries};

/// Holds the most recently generated table and the sample it came from.
#[derive(Debug, Clone, Default)]
pub struct Session {
    precision: Option<u32>,
    state: Option<Generated>,
}

#[derive(Debug, Clone)]
struct Generated {
    sample: Sample,
    table: FrequencyTable,
}

impl Session {
    /// A session using the default decimal precision.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with an explicit decimal precision (0..=10).
    pub fn with_precision(precision: u32) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(Error::InvalidPrecision(precision));
        }
        Ok(Self {
            precision: Some(precision),
            state: None,
        })
    }

    /// Decimal precision used for generation.
    pub fn precision(&self) -> u32 {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    /// Generate a table for `sample` and store it as the session state.
    ///
    /// The previous state is only replaced once generation has succeeded;
    /// on error the session is left exactly as it was.
    pub fn generate(&mut self, sample: Sample) -> Result<&FrequencyTable> {
        let table = FrequencyTable::generate(&sample, self.precision())?;
        debug!(n = sample.len(), classes = table.len(), "session updated");
        self.state = Some(Generated { sample, table });
        self.table()
    }

    /// Parse pasted text and generate from it in one step.
    pub fn generate_from_text(&mut self, text: &str) -> Result<&FrequencyTable> {
        let sample = Sample::parse(text)?;
        self.generate(sample)
    }

    /// The last generated table.
    pub fn table(&self) -> Result<&FrequencyTable> {
        self.state.as_ref().map(|g| &g.table).ok_or(Error::NoTable)
    }

    /// The sample behind the last generated table.
    pub fn sample(&self) -> Result<&Sample> {
        self.state.as_ref().map(|g| &g.sample).ok_or(Error::NoTable)
    }

    /// Histogram geometry for the last table (form picked by data kind).
    pub fn histogram_data(&self) -> Result<HistogramData> {
        let g = self.state.as_ref().ok_or(Error::NoTable)?;
        Ok(HistogramData::for_table(&g.table, &g.sample))
    }

    /// Ogive series over the last table's classes.
    pub fn ogive(&self, mode: OgiveMode) -> Result<OgiveSeries> {
        Ok(OgiveSeries::from_table(self.table()?, mode))
    }

    /// Ogive series over the raw sample, bypassing the grouped classes.
    pub fn ogive_raw(&self, mode: OgiveMode) -> Result<OgiveSeries> {
        OgiveSeries::from_raw(self.sample()?, None, mode)
    }

    /// The last table rendered as CSV.
    pub fn export_csv(&self) -> Result<String> {
        export::csv_string(self.table()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_session_rejects_reads() {
        let session = Session::new();
        assert!(matches!(session.table(), Err(Error::NoTable)));
        assert!(matches!(session.histogram_data(), Err(Error::NoTable)));
        assert!(matches!(session.ogive(OgiveMode::Absolute), Err(Error::NoTable)));
        assert!(matches!(session.ogive_raw(OgiveMode::Percentage), Err(Error::NoTable)));
        assert!(matches!(session.export_csv(), Err(Error::NoTable)));
    }

    #[test]
    fn test_generate_then_read() {
        let mut session = Session::new();
        session.generate_from_text("1 2 2 3 3 3 4 5").unwrap();

        assert_eq!(session.table().unwrap().len(), 4);
        assert!(session.histogram_data().is_ok());
        assert!(session.ogive(OgiveMode::Percentage).is_ok());
        assert!(session.export_csv().unwrap().contains("interval"));
    }

    #[test]
    fn test_failed_generation_keeps_previous_state() {
        let mut session = Session::new();
        session.generate_from_text("1 2 3 4").unwrap();
        let before = session.table().unwrap().clone();

        assert!(session.generate_from_text("not numbers").is_err());
        assert_eq!(session.table().unwrap(), &before);
    }

    #[test]
    fn test_state_replaced_wholesale() {
        let mut session = Session::new();
        session.generate_from_text("1 2 3 4").unwrap();
        session.generate_from_text("1.5 2.7 3.1 4.4 5.9").unwrap();
        assert_eq!(session.table().unwrap().len(), 3);
        assert_eq!(session.sample().unwrap().len(), 5);
    }

    #[test]
    fn test_with_precision_validation() {
        assert!(Session::with_precision(0).is_ok());
        assert!(Session::with_precision(10).is_ok());
        assert!(matches!(
            Session::with_precision(11),
            Err(Error::InvalidPrecision(11))
        ));
    }

    #[test]
    fn test_reads_are_idempotent() {
        let mut session = Session::new();
        session.generate_from_text("1 2 2 3 3 3 4 5").unwrap();
        assert_eq!(session.export_csv().unwrap(), session.export_csv().unwrap());
        assert_eq!(
            session.histogram_data().unwrap(),
            session.histogram_data().unwrap()
        );
    }
}
