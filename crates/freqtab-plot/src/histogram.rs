//! Histogram geometry
//!
//! Turns a generated table (or the raw sample, for discrete data) into the
//! bar geometry a plotting layer needs. No drawing happens here; the
//! output is plain coordinate data.

use freqtab_core::{DataKind, Sample};
use freqtab_table::FrequencyTable;
use serde::Serialize;

/// Bar geometry for a histogram, in one of two forms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum HistogramData {
    /// Contiguous bars, one per class, each spanning its class bounds.
    Continuous {
        /// (lower, upper) per class, in order
        bins: Vec<(f64, f64)>,
        /// Absolute frequency per class
        counts: Vec<usize>,
        /// Sample size
        n: usize,
    },
    /// Uniform-width bars centered on each distinct sample value.
    Discrete {
        /// Distinct values, ascending
        values: Vec<f64>,
        /// Occurrences of each value
        counts: Vec<usize>,
        /// Bar width: the smallest gap between consecutive distinct
        /// values, so adjacent bars touch (1.0 for a single value)
        bar_width: f64,
        /// Sample size
        n: usize,
    },
}

impl HistogramData {
    /// Pick the form matching the table's classification: class bars for
    /// continuous data, per-value bars for discrete data.
    pub fn for_table(table: &FrequencyTable, sample: &Sample) -> Self {
        match table.kind() {
            DataKind::Continuous => Self::grouped(table),
            DataKind::Discrete => Self::discrete(sample),
        }
    }

    /// Class-interval bars straight from the table.
    pub fn grouped(table: &FrequencyTable) -> Self {
        Self::Continuous {
            bins: table.class_bounds(),
            counts: table.absolute_counts(),
            n: table.n(),
        }
    }

    /// One bar per distinct raw value.
    pub fn discrete(sample: &Sample) -> Self {
        let mut sorted = sample.values().to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mut values: Vec<f64> = Vec::new();
        let mut counts: Vec<usize> = Vec::new();
        for &v in &sorted {
            match values.last() {
                Some(&last) if last == v => *counts.last_mut().unwrap() += 1,
                _ => {
                    values.push(v);
                    counts.push(1);
                }
            }
        }

        let bar_width = values
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .fold(f64::INFINITY, f64::min);
        let bar_width = if bar_width.is_finite() && bar_width > 0.0 {
            bar_width
        } else {
            1.0
        };

        Self::Discrete {
            values,
            counts,
            bar_width,
            n: sample.len(),
        }
    }

    /// Bar heights as densities (count / (n × width)); useful when the
    /// continuous bars should integrate to one.
    pub fn densities(&self) -> Vec<f64> {
        match self {
            Self::Continuous { bins, counts, n } => bins
                .iter()
                .zip(counts)
                .map(|(&(lo, hi), &c)| {
                    let width = hi - lo;
                    if width > 0.0 && *n > 0 {
                        c as f64 / (*n as f64 * width)
                    } else {
                        0.0
                    }
                })
                .collect(),
            Self::Discrete {
                counts,
                bar_width,
                n,
                ..
            } => counts
                .iter()
                .map(|&c| c as f64 / (*n as f64 * bar_width))
                .collect(),
        }
    }

    /// All bin edges (class bounds, or bar edges for discrete data).
    pub fn edges(&self) -> Vec<f64> {
        match self {
            Self::Continuous { bins, .. } => {
                if bins.is_empty() {
                    return vec![];
                }
                let mut edges = Vec::with_capacity(bins.len() + 1);
                edges.push(bins[0].0);
                edges.extend(bins.iter().map(|&(_, hi)| hi));
                edges
            }
            Self::Discrete {
                values, bar_width, ..
            } => {
                let half = bar_width / 2.0;
                let mut edges: Vec<f64> = values.iter().map(|&v| v - half).collect();
                if let Some(&last) = values.last() {
                    edges.push(last + half);
                }
                edges
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn table_for(values: &[f64]) -> (Sample, FrequencyTable) {
        let sample = Sample::new(values.to_vec()).unwrap();
        let table = FrequencyTable::generate(&sample, 2).unwrap();
        (sample, table)
    }

    #[test]
    fn test_grouped_geometry() {
        let (_, table) = table_for(&[1.5, 2.7, 3.1, 4.4, 5.9]);
        let hist = HistogramData::grouped(&table);
        match &hist {
            HistogramData::Continuous { bins, counts, n } => {
                assert_eq!(bins.len(), 3);
                assert_eq!(counts.iter().sum::<usize>(), 5);
                assert_eq!(*n, 5);
                assert_relative_eq!(bins[0].0, 1.5);
                assert_relative_eq!(bins[2].1, 5.9);
            }
            _ => panic!("expected continuous form"),
        }
        assert_eq!(hist.edges().len(), 4);
    }

    #[test]
    fn test_discrete_geometry() {
        let (sample, table) = table_for(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 5.0]);
        let hist = HistogramData::for_table(&table, &sample);
        match &hist {
            HistogramData::Discrete {
                values,
                counts,
                bar_width,
                n,
            } => {
                assert_eq!(values, &vec![1.0, 2.0, 3.0, 4.0, 5.0]);
                assert_eq!(counts, &vec![1, 2, 3, 1, 1]);
                assert_relative_eq!(*bar_width, 1.0);
                assert_eq!(*n, 8);
            }
            _ => panic!("expected discrete form"),
        }
    }

    #[test]
    fn test_discrete_bar_width_smallest_gap() {
        let sample = Sample::new(vec![0.0, 10.0, 12.0, 20.0]).unwrap();
        let hist = HistogramData::discrete(&sample);
        match hist {
            HistogramData::Discrete { bar_width, .. } => assert_relative_eq!(bar_width, 2.0),
            _ => panic!("expected discrete form"),
        }
    }

    #[test]
    fn test_single_distinct_value_uses_unit_width() {
        let sample = Sample::new(vec![5.0, 5.0, 5.0]).unwrap();
        let hist = HistogramData::discrete(&sample);
        match &hist {
            HistogramData::Discrete {
                values,
                counts,
                bar_width,
                ..
            } => {
                assert_eq!(values, &vec![5.0]);
                assert_eq!(counts, &vec![3]);
                assert_relative_eq!(*bar_width, 1.0);
            }
            _ => panic!("expected discrete form"),
        }
        assert_eq!(hist.edges(), vec![4.5, 5.5]);
    }

    #[test]
    fn test_continuous_densities_integrate_to_one() {
        let (_, table) = table_for(&[1.5, 2.7, 3.1, 4.4, 5.9, 2.2, 3.3, 4.1]);
        let hist = HistogramData::grouped(&table);
        let densities = hist.densities();
        let edges = hist.edges();
        let total: f64 = densities
            .iter()
            .zip(edges.windows(2))
            .map(|(d, e)| d * (e[1] - e[0]))
            .sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
    }
}
