// transition.rs - Eased keyframe tweens with a per-target start delay

use egui::Color32;
use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutSine,
    EaseInOutSine,
    EaseOutElastic { amplitude: f32, period: f32 },
}

impl Easing {
    /// Elastic settle used for the color channel.
    pub const ELASTIC: Easing = Easing::EaseOutElastic { amplitude: 1.0, period: 0.5 };

    /// Maps progress in `[0, 1]` to eased progress; endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutSine => (t * PI / 2.0).sin(),
            Easing::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Easing::EaseOutElastic { amplitude, period } => {
                1.0 - elastic_in(1.0 - t, amplitude, period)
            }
        }
    }
}

fn elastic_in(t: f32, amplitude: f32, period: f32) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }
    let a = amplitude.clamp(1.0, 10.0);
    let p = period.clamp(0.1, 2.0);
    let shift = p / (2.0 * PI) * (1.0 / a).asin();
    -a * 2f32.powf(10.0 * (t - 1.0)) * (((t - 1.0) - shift) * 2.0 * PI / p).sin()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub value: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(value: f32, duration: Duration, easing: Easing) -> Self {
        Self { value, duration, easing }
    }
}

/// A scalar property animated through consecutive keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub from: f32,
    pub keyframes: Vec<Keyframe>,
}

impl Track {
    pub fn new(from: f32, keyframes: Vec<Keyframe>) -> Self {
        Self { from, keyframes }
    }

    pub fn duration(&self) -> Duration {
        self.keyframes.iter().map(|k| k.duration).sum()
    }

    /// Value at `elapsed` since the track started (delay already removed).
    pub fn sample(&self, elapsed: Duration) -> f32 {
        let mut start = self.from;
        let mut remaining = elapsed;
        for key in &self.keyframes {
            if remaining < key.duration {
                let t = remaining.as_secs_f32() / key.duration.as_secs_f32();
                return start + (key.value - start) * key.easing.apply(t);
            }
            remaining -= key.duration;
            start = key.value;
        }
        start
    }
}

/// Color tween interpolated per RGB channel.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTrack {
    pub from: Color32,
    pub to: Color32,
    pub duration: Duration,
    pub easing: Easing,
}

impl ColorTrack {
    pub fn sample(&self, elapsed: Duration) -> Color32 {
        if elapsed >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = self.easing.apply(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        let mix = |a: u8, b: u8| {
            let v = a as f32 + (b as f32 - a as f32) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Color32::from_rgb(
            mix(self.from.r(), self.to.r()),
            mix(self.from.g(), self.to.g()),
            mix(self.from.b(), self.to.b()),
        )
    }
}

/// What the painter needs to draw one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileVisual {
    pub color: Color32,
    pub scale: f32,
    pub rotation_deg: f32,
}

impl TileVisual {
    pub fn resting(color: Color32) -> Self {
        Self { color, scale: 1.0, rotation_deg: 0.0 }
    }
}

/// All tracks of one tile, started together after `delay`.
#[derive(Clone, Debug, PartialEq)]
pub struct TileTween {
    pub started_at: Duration,
    pub delay: Duration,
    pub color: ColorTrack,
    pub scale: Track,
    pub rotation: Track,
}

impl TileTween {
    fn local_time(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at + self.delay)
    }

    pub fn sample(&self, now: Duration) -> TileVisual {
        let t = self.local_time(now);
        TileVisual {
            color: self.color.sample(t),
            scale: self.scale.sample(t),
            rotation_deg: self.rotation.sample(t),
        }
    }

    pub fn end(&self) -> Duration {
        let longest = self
            .color
            .duration
            .max(self.scale.duration())
            .max(self.rotation.duration());
        self.started_at + self.delay + longest
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        now >= self.end()
    }
}
