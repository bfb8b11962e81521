//! rocketviz - rocket flight telemetry viewer

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rocketviz::{run_viewer, ViewerConfig};

#[derive(Parser, Debug)]
#[command(name = "rocketviz")]
#[command(about = "Animate rocket orientation and chart flight telemetry from CSV files")]
#[command(version)]
struct Cli {
    /// Altitude/velocity CSV: timestamp,pitch,yaw,roll,altitude,velocity
    #[arg(short, long)]
    flight: Option<PathBuf>,

    /// Orientation CSV: timestamp,pitch,roll,yaw (defaults to the flight file)
    #[arg(short, long)]
    orientation: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds between animation frames
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Records shown per chart
    #[arg(long)]
    window_size: Option<usize>,

    /// Fail on malformed rows instead of reading them as NaN
    #[arg(long)]
    strict: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<ViewerConfig> {
        let mut cfg = match &self.config {
            Some(path) => ViewerConfig::from_yaml_file(path).with_context(|| format!("loading config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if let Some(p) = self.flight {
            cfg.flight_path = p;
        }
        if let Some(p) = self.orientation {
            cfg.orientation_path = Some(p);
        }
        if let Some(ms) = self.interval_ms {
            cfg.tick_interval_ms = ms;
        }
        if let Some(n) = self.window_size {
            cfg.window_size = n;
        }
        cfg.strict |= self.strict;
        cfg.validate().context("invalid options")?;
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let cfg = Cli::parse().into_config()?;
    tracing::info!(
        flight = %cfg.flight_path.display(),
        orientation = ?cfg.orientation_path,
        interval_ms = cfg.tick_interval_ms,
        window = cfg.window_size,
        "starting viewer"
    );
    run_viewer(cfg).map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
