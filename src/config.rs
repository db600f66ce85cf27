// config.rs - Tunable constants for the tile grid and the cascade

use anyhow::{Context, Result, bail};
use egui::Color32;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::stagger::DistanceMetric;

pub const DEFAULT_TILE_UNIT: f32 = 50.0;           // Logical pixels per tile edge
pub const DEFAULT_STAGGER_STEP_MS: u64 = 50;       // Delay per unit of grid distance
pub const DEFAULT_STARTUP_DELAY_MS: u64 = 1000;    // One-shot startup cascade

/// Hue/saturation/lightness bounds for generated colors.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub hue_min: u16,
    pub hue_max: u16,          // inclusive
    pub saturation: u8,
    pub lightness_min: u8,
    pub lightness_max: u8,     // exclusive, as the lightness roll is floored
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            hue_min: 0,
            hue_max: 360,
            saturation: 100,
            lightness_min: 30,
            lightness_max: 80,
        }
    }
}

/// Shape of the scale/rotation pulse and the color tween.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub scale_low: f32,
    pub scale_high: f32,
    pub scale_phase_ms: u64,
    pub rotation_deg: f32,
    pub rotation_ms: u64,
    pub color_ms: u64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            scale_low: 0.1,
            scale_high: 1.1,
            scale_phase_ms: 100,
            rotation_deg: 90.0,
            rotation_ms: 200,
            color_ms: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CascadeConfig {
    pub tile_unit: f32,
    pub stagger_step_ms: u64,
    pub startup_delay_ms: u64,
    pub metric: DistanceMetric,
    pub seed: Option<u64>,
    pub idle_color: [u8; 3],   // Tile color before the first cascade
    pub background: [u8; 3],   // Shows through the gaps and behind shrunken tiles
    pub color: ColorConfig,
    pub pulse: PulseConfig,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            tile_unit: DEFAULT_TILE_UNIT,
            stagger_step_ms: DEFAULT_STAGGER_STEP_MS,
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
            metric: DistanceMetric::default(),
            seed: None,
            idle_color: [40, 40, 40],
            background: [0, 0, 0],
            color: ColorConfig::default(),
            pulse: PulseConfig::default(),
        }
    }
}

impl CascadeConfig {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    /// Rejects values the grid and color generator cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !self.tile_unit.is_finite() || self.tile_unit <= 0.0 {
            bail!("tile_unit must be a positive number, got {}", self.tile_unit);
        }
        let c = &self.color;
        if c.hue_min > c.hue_max || c.hue_max > 360 {
            bail!("hue range {}..={} is not within 0..=360", c.hue_min, c.hue_max);
        }
        if c.saturation > 100 {
            bail!("saturation must be at most 100, got {}", c.saturation);
        }
        if c.lightness_min >= c.lightness_max || c.lightness_max > 100 {
            bail!(
                "lightness range {}..{} is empty or exceeds 100",
                c.lightness_min,
                c.lightness_max
            );
        }
        if !(self.pulse.scale_low.is_finite() && self.pulse.scale_high.is_finite()) {
            bail!("pulse scales must be finite");
        }
        Ok(())
    }
}

/// Missing fields fall back to their defaults.
pub fn load_config(path: &Path) -> Result<CascadeConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let config: CascadeConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    Ok(config)
}
