//! Class interval construction
//!
//! Materializes the contiguous class boundaries a [`ClassPlan`] describes.
//! The first lower bound is pinned to the sample minimum and the last
//! upper bound is forced to the sample maximum, absorbing whatever drift
//! the rounded width accumulated on the way.

use std::fmt;

use freqtab_core::DataKind;
use serde::Serialize;

use crate::plan::ClassPlan;

/// One class of the frequency table.
///
/// Bounds are the real values used for assignment; `label` is the
/// rendered form. For discrete data the label shows floored/ceiled
/// integer bounds, which is cosmetic rounding only — tabulation always
/// tests against `lower` and `upper`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassInterval {
    /// Lower bound (inclusive)
    pub lower: f64,
    /// Upper bound; exclusive for non-final continuous classes, inclusive
    /// otherwise
    pub upper: f64,
    /// Whether this is the final class
    pub is_last: bool,
    /// Rendered `lo |- hi` / `lo |-| hi` form
    pub label: String,
}

impl ClassInterval {
    /// Midpoint of the class.
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Width of the class.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether `value` belongs to this class under the given kind's
    /// inclusion rule.
    ///
    /// Discrete classes include both bounds; a value sitting on a shared
    /// boundary therefore matches two adjacent classes, and the caller
    /// resolves the tie by taking the first match. Continuous classes are
    /// half-open `[lower, upper)` except the last, which is closed so the
    /// sample maximum is always captured.
    pub fn admits(&self, value: f64, kind: DataKind) -> bool {
        match kind {
            DataKind::Discrete => self.lower <= value && value <= self.upper,
            DataKind::Continuous => {
                if self.is_last {
                    self.lower <= value && value <= self.upper
                } else {
                    self.lower <= value && value < self.upper
                }
            }
        }
    }
}

impl fmt::Display for ClassInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Build the `plan.count` contiguous intervals covering `[min, max]`.
///
/// Accumulation starts at `min`; each upper bound is `lower + width`
/// except the final one, which is forced to `max` regardless of the
/// accumulated rounding error.
pub fn build_intervals(min: f64, max: f64, plan: &ClassPlan, kind: DataKind) -> Vec<ClassInterval> {
    let mut intervals = Vec::with_capacity(plan.count);
    let mut lower = min;

    for i in 0..plan.count {
        let is_last = i == plan.count - 1;
        let upper = if is_last { max } else { lower + plan.width };

        intervals.push(ClassInterval {
            lower,
            upper,
            is_last,
            label: label_for(lower, upper, is_last, kind, plan.precision),
        });
        lower = upper;
    }

    intervals
}

/// Render one class label.
///
/// `|-` marks the upper bound open, `|-|` (final class) marks it closed.
fn label_for(lower: f64, upper: f64, is_last: bool, kind: DataKind, precision: u32) -> String {
    match kind {
        DataKind::Discrete => {
            if is_last {
                format!("{} |-| {}", lower.trunc() as i64, upper.ceil() as i64)
            } else {
                format!("{} |- {}", lower.trunc() as i64, upper.floor() as i64)
            }
        }
        DataKind::Continuous => {
            let p = precision as usize;
            if is_last {
                format!("{lower:.p$} |-| {upper:.p$}")
            } else {
                format!("{lower:.p$} |- {upper:.p$}")
            }
        }
    }
}
