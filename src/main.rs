// main.rs - Tile cascade window
// Click any tile to ripple a new color across the grid

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use eframe::egui;
use std::path::PathBuf;

use tile_cascade::config::{self, CascadeConfig};
use tile_cascade::stagger::DistanceMetric;
use tile_cascade::TileCascadeApp;

#[derive(Parser, Debug)]
#[command(about = "Full-window tile grid that cascades a random color from each click")]
struct Args {
    /// JSON settings file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// tile edge in logical pixels
    #[arg(long)]
    tile_size: Option<f32>,

    /// delay per unit of grid distance (ms)
    #[arg(long)]
    stagger_ms: Option<u64>,

    /// delay before the automatic first cascade (ms)
    #[arg(long)]
    startup_delay_ms: Option<u64>,

    /// how grid distance from the clicked tile is measured
    #[arg(long, value_enum)]
    metric: Option<DistanceMetric>,

    /// seed for a repeatable color sequence
    #[arg(long)]
    seed: Option<u64>,

    /// initial window width in logical pixels
    #[arg(long, default_value_t = 1024.0)]
    width: f32,

    /// initial window height in logical pixels
    #[arg(long, default_value_t = 768.0)]
    height: f32,
}

impl Args {
    fn resolve_config(&self) -> Result<CascadeConfig> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => CascadeConfig::default(),
        };
        if let Some(unit) = self.tile_size { config.tile_unit = unit; }
        if let Some(step) = self.stagger_ms { config.stagger_step_ms = step; }
        if let Some(delay) = self.startup_delay_ms { config.startup_delay_ms = delay; }
        if let Some(metric) = self.metric { config.metric = metric; }
        if self.seed.is_some() { config.seed = self.seed; }
        config.validate().context("invalid settings")?;
        Ok(config)
    }

    fn window_size(&self) -> Result<[f32; 2]> {
        for (name, extent) in [("width", self.width), ("height", self.height)] {
            if !extent.is_finite() || extent <= 0.0 {
                bail!("window {name} must be a positive number, got {extent}");
            }
        }
        Ok([self.width, self.height])
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.resolve_config()?;
    let window_size = args.window_size()?;
    let runtime = tokio::runtime::Runtime::new().context("starting timer runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Tile Cascade")
            .with_inner_size(window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Tile Cascade",
        options,
        Box::new(move |cc| Box::new(TileCascadeApp::new(cc, config, runtime))),
    )
    .map_err(|e| anyhow!("window closed with an error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_size() {
        let args = Args::try_parse_from(["tile_cascade"]).unwrap();
        assert_eq!(args.window_size().unwrap(), [1024.0, 768.0]);
    }

    #[test]
    fn rejects_non_positive_window_size() {
        let args = Args::try_parse_from(["tile_cascade", "--width=-200"]).unwrap();
        assert!(args.window_size().is_err());
        let args = Args::try_parse_from(["tile_cascade", "--height", "0"]).unwrap();
        assert!(args.window_size().is_err());
    }

    #[test]
    fn flags_override_settings() {
        let args = Args::try_parse_from(["tile_cascade", "--tile-size", "32", "--metric", "manhattan", "--seed", "9"])
            .unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.tile_unit, 32.0);
        assert_eq!(config.metric, DistanceMetric::Manhattan);
        assert_eq!(config.seed, Some(9));
    }
}
