//! rocketviz crate root: re-exports and module wiring.
//!
//! The crate is split into a UI-free core and the egui viewer:
//! - `data`: telemetry records, CSV parsing, windows, path interpolation and
//!   axis scaling
//! - `clock`: the frame clock that drives the animation
//! - `loader`: background loading of the CSV sources
//! - `config`: viewer configuration
//! - `app`: the eframe application and its run helper

pub mod app;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod loader;
pub mod theme;

pub use app::{run_viewer, ViewerApp};
pub use clock::{FrameClock, FrameTick, DEFAULT_TICK_INTERVAL};
pub use config::ViewerConfig;
pub use data::frame_view::{format_timestamp_label, FrameView};
pub use data::parser::{load_sequence, parse_row, parse_sequence, FieldIssue, MalformedRow, ParsePolicy};
pub use data::path::{interpolate_path, pitch_roll_path, PathPoint, DEFAULT_INTERPOLATION_STEPS};
pub use data::record::{Column, Metric, SourceKind, TelemetryRecord};
pub use data::scale::{metric_range, padded_range, AxisRange, PADDING_FRACTION};
pub use data::sequence::{TelemetrySequence, TelemetrySources};
pub use data::window::{window, window_range, DEFAULT_WINDOW_SIZE};
pub use error::TelemetryError;
pub use loader::{spawn_loader, LoadEvent, LoadPlan, LoadState};
