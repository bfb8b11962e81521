//! Y-axis bounds for the altitude and velocity charts.

use crate::data::record::{Metric, TelemetryRecord};

/// Headroom added above the largest value, as a fraction of it.
pub const PADDING_FRACTION: f64 = 0.2;

/// A y-axis range. `min` is always `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const ZERO: AxisRange = AxisRange { min: 0.0, max: 0.0 };

    /// `true` when the range has no extent (empty or all-zero window) or a
    /// `NaN` bound.
    pub fn is_degenerate(&self) -> bool {
        self.max.is_nan() || self.min.is_nan() || self.max <= self.min
    }
}

/// `[0, max + max * 0.2]` over `values`.
///
/// An empty input yields `[0, 0]`. A `NaN` value makes the maximum `NaN`.
pub fn padded_range<I>(values: I) -> AxisRange
where
    I: IntoIterator<Item = f64>,
{
    let mut max: Option<f64> = None;
    for v in values {
        max = Some(match max {
            None => v,
            Some(m) if m.is_nan() || v.is_nan() => f64::NAN,
            Some(m) => m.max(v),
        });
    }
    let max = max.unwrap_or(0.0);
    AxisRange {
        min: 0.0,
        max: max + max * PADDING_FRACTION,
    }
}

/// Padded range of one metric over a record window.
pub fn metric_range(records: &[TelemetryRecord], metric: Metric) -> AxisRange {
    padded_range(records.iter().filter_map(|r| r.metric(metric)))
}
