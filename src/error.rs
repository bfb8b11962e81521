//! Error types shared by the parser, loader and configuration.

use std::path::PathBuf;

use crate::data::parser::MalformedRow;

/// Errors produced while loading telemetry or configuration.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The source file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The CSV reader could not split the input into records.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    /// A row contained non-numeric fields and the strict policy was selected.
    #[error("{0}")]
    MalformedRow(Box<MalformedRow>),
    /// The viewer configuration is invalid or could not be read.
    #[error("config: {0}")]
    Config(String),
}

impl From<MalformedRow> for TelemetryError {
    fn from(row: MalformedRow) -> Self {
        TelemetryError::MalformedRow(Box::new(row))
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
