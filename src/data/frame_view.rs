//! Everything the viewer draws for one frame, derived from the sources and
//! the current frame index.

use crate::data::path::{pitch_roll_path, PathPoint};
use crate::data::record::{Metric, TelemetryRecord};
use crate::data::scale::{metric_range, AxisRange};
use crate::data::sequence::TelemetrySources;

/// Derived views for a single frame. Recomputed on every repaint.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView<'a> {
    pub frame: usize,
    pub cycle_len: usize,
    /// Orientation record at `frame`; drives the rocket model.
    pub current: TelemetryRecord,
    pub orientation: &'a [TelemetryRecord],
    pub flight: &'a [TelemetryRecord],
    pub path: Vec<PathPoint>,
    pub altitude_range: AxisRange,
    pub velocity_range: AxisRange,
}

impl<'a> FrameView<'a> {
    /// Returns `None` while either source is empty.
    ///
    /// A `frame` outside the cycle wraps around it.
    pub fn compute(sources: &'a TelemetrySources, frame: usize, window_size: usize, steps: usize) -> Option<Self> {
        let cycle_len = sources.cycle_len();
        if cycle_len == 0 {
            return None;
        }
        let frame = frame % cycle_len;
        let orientation = sources.orientation.window(frame, window_size);
        let flight = sources.flight.window(frame, window_size);
        Some(FrameView {
            frame,
            cycle_len,
            current: sources.orientation[frame],
            orientation,
            flight,
            path: pitch_roll_path(orientation, steps),
            altitude_range: metric_range(flight, Metric::Altitude),
            velocity_range: metric_range(flight, Metric::Velocity),
        })
    }

    /// `[timestamp, value]` pairs of `metric` over the window it belongs to.
    pub fn series(&self, metric: Metric) -> Vec<[f64; 2]> {
        let records = match metric {
            Metric::Altitude | Metric::Velocity => self.flight,
            _ => self.orientation,
        };
        records
            .iter()
            .filter_map(|r| r.metric(metric).map(|v| [r.timestamp, v]))
            .collect()
    }
}

/// Chart label for a timestamp, one decimal place.
pub fn format_timestamp_label(t: f64) -> String {
    format!("{t:.1}")
}
