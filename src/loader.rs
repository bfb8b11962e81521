//! Background loading of the telemetry files.
//!
//! The viewer starts with nothing to show; [`spawn_loader`] reads the files on
//! a worker thread and delivers each parsed sequence over a channel so the UI
//! thread never blocks on disk.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use crate::data::parser::{load_sequence, ParsePolicy};
use crate::data::record::SourceKind;
use crate::data::sequence::{TelemetrySequence, TelemetrySources};
use crate::error::TelemetryError;

/// Which files to read.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    /// Altitude/velocity file. Also feeds orientation when `orientation` is `None`.
    pub flight: PathBuf,
    pub orientation: Option<PathBuf>,
    pub policy: ParsePolicy,
}

/// Messages from the loader thread.
#[derive(Debug)]
pub enum LoadEvent {
    Loaded {
        kind: SourceKind,
        sequence: TelemetrySequence,
    },
    Failed {
        kind: SourceKind,
        error: TelemetryError,
    },
}

/// Read the files of `plan` on a worker thread.
///
/// With a single flight file, one `Loaded` event is sent for each
/// [`SourceKind`], both carrying the same sequence.
pub fn spawn_loader(plan: LoadPlan) -> Receiver<LoadEvent> {
    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        let flight = load_sequence(&plan.flight, SourceKind::Flight, plan.policy);
        let orientation = match &plan.orientation {
            Some(path) => Some(load_sequence(path, SourceKind::Orientation, plan.policy)),
            None => None,
        };
        let events = match (flight, orientation) {
            (Ok(flight), None) => vec![
                LoadEvent::Loaded {
                    kind: SourceKind::Orientation,
                    sequence: flight.clone(),
                },
                LoadEvent::Loaded {
                    kind: SourceKind::Flight,
                    sequence: flight,
                },
            ],
            (Err(error), None) => vec![LoadEvent::Failed {
                kind: SourceKind::Flight,
                error,
            }],
            (flight, Some(orientation)) => vec![to_event(SourceKind::Flight, flight), to_event(SourceKind::Orientation, orientation)],
        };
        for ev in events {
            if let LoadEvent::Failed { kind, error } = &ev {
                tracing::error!(source = kind.label(), "{error}");
            }
            if tx.send(ev).is_err() {
                break;
            }
        }
    });
    rx
}

fn to_event(kind: SourceKind, result: Result<TelemetrySequence, TelemetryError>) -> LoadEvent {
    match result {
        Ok(sequence) => LoadEvent::Loaded { kind, sequence },
        Err(error) => LoadEvent::Failed { kind, error },
    }
}

/// Collects loader events until both sources are present.
#[derive(Debug, Default)]
pub struct LoadState {
    pub orientation: Option<TelemetrySequence>,
    pub flight: Option<TelemetrySequence>,
    pub errors: Vec<String>,
}

impl LoadState {
    pub fn apply(&mut self, event: LoadEvent) {
        match event {
            LoadEvent::Loaded { kind, sequence } => match kind {
                SourceKind::Orientation => self.orientation = Some(sequence),
                SourceKind::Flight => self.flight = Some(sequence),
            },
            LoadEvent::Failed { kind, error } => {
                self.errors.push(format!("{}: {error}", kind.label()));
            }
        }
    }

    /// Both sources, once both have arrived.
    pub fn sources(&self) -> Option<TelemetrySources> {
        match (&self.orientation, &self.flight) {
            (Some(o), Some(f)) => Some(TelemetrySources::new(o.clone(), f.clone())),
            _ => None,
        }
    }
}
