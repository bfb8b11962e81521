//! CSV telemetry parsing.
//!
//! The first line of the input is a header and is skipped. Every following
//! non-empty line is split on `,` (quotes carry no meaning) and each field
//! is trimmed and read as `f64` in the column order of the [`SourceKind`]. A row with unreadable fields is
//! reported through [`MalformedRow`]; what happens next is decided by the
//! [`ParsePolicy`].

use std::fmt;
use std::path::Path;

use csv::ReaderBuilder;

use crate::data::record::{Column, SourceKind, TelemetryRecord};
use crate::data::sequence::TelemetrySequence;
use crate::error::{Result, TelemetryError};

/// How the parser treats rows with non-numeric or missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Keep the row with `NaN` in every bad field and log a warning.
    #[default]
    Lenient,
    /// Abort on the first malformed row.
    Strict,
}

/// A field that could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub column: Column,
    /// Raw text of the field, `None` when the row ended before this column.
    pub raw: Option<String>,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.raw {
            Some(raw) => write!(f, "{}={:?}", self.column.name(), raw),
            None => write!(f, "{} missing", self.column.name()),
        }
    }
}

/// A data line with at least one unreadable field.
///
/// `coerced` holds the record with `NaN` substituted for every bad field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: malformed {}", describe(.issues))]
pub struct MalformedRow {
    pub line: u64,
    pub issues: Vec<FieldIssue>,
    pub coerced: TelemetryRecord,
}

fn describe(issues: &[FieldIssue]) -> String {
    issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
}

/// Parse the fields of one data line.
///
/// Extra trailing fields are ignored.
pub fn parse_row(fields: &[&str], kind: SourceKind, line: u64) -> std::result::Result<TelemetryRecord, MalformedRow> {
    let columns = kind.columns();
    let mut values = Vec::with_capacity(columns.len());
    let mut issues = Vec::new();
    for (i, col) in columns.iter().enumerate() {
        match fields.get(i).map(|f| f.trim()) {
            Some(raw) => match raw.parse::<f64>() {
                Ok(v) => values.push(v),
                Err(_) => {
                    values.push(f64::NAN);
                    issues.push(FieldIssue {
                        column: *col,
                        raw: Some(raw.to_string()),
                    });
                }
            },
            None => {
                values.push(f64::NAN);
                issues.push(FieldIssue { column: *col, raw: None });
            }
        }
    }
    let record = TelemetryRecord::from_values(kind, &values);
    if issues.is_empty() {
        Ok(record)
    } else {
        Err(MalformedRow {
            line,
            issues,
            coerced: record,
        })
    }
}

/// Parse a whole source. Header-only or empty input gives an empty sequence.
pub fn parse_sequence(text: &str, kind: SourceKind, policy: ParsePolicy) -> Result<TelemetrySequence> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    let mut malformed = 0usize;
    for result in reader.records() {
        let row = result?;
        if row.len() == 1 && row.get(0).is_some_and(str::is_empty) {
            continue;
        }
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let fields: Vec<&str> = row.iter().collect();
        match parse_row(&fields, kind, line) {
            Ok(rec) => records.push(rec),
            Err(bad) => match policy {
                ParsePolicy::Strict => return Err(bad.into()),
                ParsePolicy::Lenient => {
                    tracing::warn!(source = kind.label(), "{bad}; using NaN");
                    malformed += 1;
                    records.push(bad.coerced);
                }
            },
        }
    }

    tracing::debug!(
        source = kind.label(),
        rows = records.len(),
        malformed,
        "parsed telemetry"
    );
    Ok(TelemetrySequence::new(kind, records))
}

/// Read and parse a source file.
pub fn load_sequence<P: AsRef<Path>>(path: P, kind: SourceKind, policy: ParsePolicy) -> Result<TelemetrySequence> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| TelemetryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let seq = parse_sequence(&text, kind, policy)?;
    tracing::info!(path = %path.display(), source = kind.label(), rows = seq.len(), "loaded telemetry");
    Ok(seq)
}
