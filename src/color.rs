// color.rs - Random HSL cascade colors

use egui::Color32;
use rand::Rng;
use std::fmt;

use crate::config::ColorConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: u16,        // degrees, 0..=360
    pub saturation: u8,  // percent
    pub lightness: u8,   // percent
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Uniform hue over the inclusive range, fixed saturation, lightness floored from a uniform roll.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &ColorConfig) -> Self {
        Self {
            hue: rng.gen_range(config.hue_min..=config.hue_max),
            saturation: config.saturation,
            lightness: rng.gen_range(config.lightness_min..config.lightness_max),
        }
    }

    pub fn to_color32(self) -> Color32 {
        let h = (self.hue % 360) as f32 / 360.0;
        let s = self.saturation.min(100) as f32 / 100.0;
        let l = self.lightness.min(100) as f32 / 100.0;

        if s == 0.0 {
            let v = (l * 255.0).round() as u8;
            return Color32::from_rgb(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let channel = |offset: f32| {
            let v = hue_to_rgb(p, q, h + offset);
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };
        Color32::from_rgb(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 { t += 1.0; }
    if t > 1.0 { t -= 1.0; }
    if t < 1.0 / 6.0 { return p + (q - p) * 6.0 * t; }
    if t < 1.0 / 2.0 { return q; }
    if t < 2.0 / 3.0 { return p + (q - p) * (2.0 / 3.0 - t) * 6.0; }
    p
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}
