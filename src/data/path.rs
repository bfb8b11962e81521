//! Densified pitch/roll path for the path-trace chart.

use crate::data::record::TelemetryRecord;

/// Points inserted between two consecutive samples.
pub const DEFAULT_INTERPOLATION_STEPS: usize = 4;

/// A point of the pitch/roll path: `x` is pitch, `y` is roll.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn lerp(self, to: PathPoint, t: f64) -> PathPoint {
        PathPoint {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

impl From<PathPoint> for [f64; 2] {
    fn from(p: PathPoint) -> Self {
        [p.x, p.y]
    }
}

impl From<&TelemetryRecord> for PathPoint {
    fn from(r: &TelemetryRecord) -> Self {
        PathPoint { x: r.pitch, y: r.roll }
    }
}

/// Insert `steps` linearly interpolated points between every pair of samples.
///
/// Each original point is emitted once, in order, with the interpolated
/// points at `t = j / (steps + 1)` for `j` in `1..=steps` between them. The
/// result has `(n - 1) * (steps + 1) + 1` points for `n >= 1` inputs.
pub fn interpolate_path(points: &[PathPoint], steps: usize) -> Vec<PathPoint> {
    let Some(last) = points.last() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity((points.len() - 1) * (steps + 1) + 1);
    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        out.push(p1);
        for j in 1..=steps {
            let t = j as f64 / (steps + 1) as f64;
            out.push(p1.lerp(p2, t));
        }
    }
    out.push(*last);
    out
}

/// Pitch/roll path of a record window.
pub fn pitch_roll_path(records: &[TelemetryRecord], steps: usize) -> Vec<PathPoint> {
    let points: Vec<PathPoint> = records.iter().map(PathPoint::from).collect();
    interpolate_path(&points, steps)
}
