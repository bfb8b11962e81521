//! Telemetry record and source schemas.

/// The two telemetry sources the viewer understands.
///
/// Each source has a fixed column order; the header line of the CSV is not
/// consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `timestamp,pitch,roll,yaw` as written by the IMU logger.
    Orientation,
    /// `timestamp,pitch,yaw,roll,altitude,velocity` from the flight simulation.
    Flight,
}

/// A single column of a source schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Timestamp,
    Pitch,
    Yaw,
    Roll,
    Altitude,
    Velocity,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "timestamp",
            Column::Pitch => "pitch",
            Column::Yaw => "yaw",
            Column::Roll => "roll",
            Column::Altitude => "altitude",
            Column::Velocity => "velocity",
        }
    }
}

impl SourceKind {
    /// Column order of a data line for this source.
    pub fn columns(self) -> &'static [Column] {
        match self {
            SourceKind::Orientation => &[Column::Timestamp, Column::Pitch, Column::Roll, Column::Yaw],
            SourceKind::Flight => &[
                Column::Timestamp,
                Column::Pitch,
                Column::Yaw,
                Column::Roll,
                Column::Altitude,
                Column::Velocity,
            ],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SourceKind::Orientation => "orientation",
            SourceKind::Flight => "altitude/velocity",
        }
    }
}

/// One row of a parsed telemetry source.
///
/// `altitude` and `velocity` are only present for [`SourceKind::Flight`]
/// records. Fields that failed to parse hold `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TelemetryRecord {
    /// Seconds since the start of the recording.
    pub timestamp: f64,
    /// Degrees.
    pub pitch: f64,
    /// Degrees.
    pub yaw: f64,
    /// Degrees.
    pub roll: f64,
    /// Millimetres.
    pub altitude: Option<f64>,
    /// Metres per second.
    pub velocity: Option<f64>,
}

impl TelemetryRecord {
    /// Build a record from values laid out in `kind`'s column order.
    pub fn from_values(kind: SourceKind, values: &[f64]) -> Self {
        let mut rec = TelemetryRecord::default();
        if kind == SourceKind::Flight {
            rec.altitude = Some(f64::NAN);
            rec.velocity = Some(f64::NAN);
        }
        for (col, value) in kind.columns().iter().zip(values.iter().copied()) {
            rec.set(*col, value);
        }
        rec
    }

    fn set(&mut self, col: Column, value: f64) {
        match col {
            Column::Timestamp => self.timestamp = value,
            Column::Pitch => self.pitch = value,
            Column::Yaw => self.yaw = value,
            Column::Roll => self.roll = value,
            Column::Altitude => self.altitude = Some(value),
            Column::Velocity => self.velocity = Some(value),
        }
    }

    /// Value of `metric` for this record, `None` when the source does not carry it.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Pitch => Some(self.pitch),
            Metric::Yaw => Some(self.yaw),
            Metric::Roll => Some(self.roll),
            Metric::Altitude => self.altitude,
            Metric::Velocity => self.velocity,
        }
    }
}

/// A plottable series of a telemetry sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Pitch,
    Yaw,
    Roll,
    Altitude,
    Velocity,
}

impl Metric {
    pub const ORIENTATION: [Metric; 3] = [Metric::Pitch, Metric::Yaw, Metric::Roll];

    /// Chart label including the unit.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Pitch => "Pitch",
            Metric::Yaw => "Yaw",
            Metric::Roll => "Roll",
            Metric::Altitude => "Altitude (mm)",
            Metric::Velocity => "Velocity (m/s)",
        }
    }
}
