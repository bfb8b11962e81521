use std::ops::Deref;
use std::sync::Arc;

use crate::data::record::{Metric, SourceKind, TelemetryRecord};
use crate::data::window;

/// Ordered telemetry records of one source, immutable once loaded.
///
/// Cloning is cheap: the records are shared.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySequence {
    kind: SourceKind,
    records: Arc<[TelemetryRecord]>,
}

impl TelemetrySequence {
    pub fn new(kind: SourceKind, records: Vec<TelemetryRecord>) -> Self {
        Self {
            kind,
            records: records.into(),
        }
    }

    pub fn empty(kind: SourceKind) -> Self {
        Self::new(kind, Vec::new())
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn records(&self) -> &[TelemetryRecord] {
        &self.records
    }

    /// Window of at most `size` records ending at `frame`.
    pub fn window(&self, frame: usize, size: usize) -> &[TelemetryRecord] {
        window::window(self.records(), frame, size)
    }

    /// Values of `metric` in record order; records without the metric are skipped.
    pub fn series(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.metric(metric)).collect()
    }
}

impl Deref for TelemetrySequence {
    type Target = [TelemetryRecord];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

/// The two sequences driven by one shared frame index.
///
/// They are synchronised by index only; differing sample rates are not
/// reconciled.
#[derive(Debug, Clone)]
pub struct TelemetrySources {
    pub orientation: TelemetrySequence,
    pub flight: TelemetrySequence,
}

impl TelemetrySources {
    pub fn new(orientation: TelemetrySequence, flight: TelemetrySequence) -> Self {
        Self { orientation, flight }
    }

    /// Use one flight sequence for both the orientation and the altitude/velocity views.
    pub fn from_flight(flight: TelemetrySequence) -> Self {
        Self {
            orientation: flight.clone(),
            flight,
        }
    }

    /// Length of the shared frame cycle: the shorter of the two sequences.
    pub fn cycle_len(&self) -> usize {
        self.orientation.len().min(self.flight.len())
    }

    pub fn is_ready(&self) -> bool {
        self.cycle_len() > 0
    }
}
