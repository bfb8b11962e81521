//! Viewer configuration.
//!
//! The only tunables are the animation cadence and the chart window size,
//! plus the input files. Values come from an optional YAML file and are then
//! overridden by command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_TICK_INTERVAL;
use crate::data::parser::ParsePolicy;
use crate::data::window::DEFAULT_WINDOW_SIZE;
use crate::error::{Result, TelemetryError};
use crate::loader::LoadPlan;

/// Flight file read when none is given.
pub const DEFAULT_FLIGHT_FILE: &str = "dummy_rocket_data_with_velocity.csv";

/// Top-level configuration for the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    // ── Animation ────────────────────────────────────────────────────────────
    /// Milliseconds between two frames.
    pub tick_interval_ms: u64,
    /// Number of records shown by each chart.
    pub window_size: usize,

    // ── Inputs ───────────────────────────────────────────────────────────────
    /// `timestamp,pitch,yaw,roll,altitude,velocity` file.
    pub flight_path: PathBuf,
    /// Optional `timestamp,pitch,roll,yaw` file. When absent the flight file
    /// drives the orientation views too.
    pub orientation_path: Option<PathBuf>,
    /// Reject malformed rows instead of reading them as `NaN`.
    pub strict: bool,

    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL.as_millis() as u64,
            window_size: DEFAULT_WINDOW_SIZE,
            flight_path: PathBuf::from(DEFAULT_FLIGHT_FILE),
            orientation_path: None,
            strict: false,
            title: "Rocket Movement Visualization".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: ViewerConfig = serde_yaml::from_str(text).map_err(|e| TelemetryError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(TelemetryError::Config("tick_interval_ms must be greater than 0".into()));
        }
        if self.window_size == 0 {
            return Err(TelemetryError::Config("window_size must be greater than 0".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn parse_policy(&self) -> ParsePolicy {
        if self.strict {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }

    pub fn load_plan(&self) -> LoadPlan {
        LoadPlan {
            flight: self.flight_path.clone(),
            orientation: self.orientation_path.clone(),
            policy: self.parse_policy(),
        }
    }
}
