// cascade.rs - Cascade Animator: color and pulse rippling out from a tile

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

use crate::color::Hsl;
use crate::config::CascadeConfig;
use crate::grid::TileGrid;
use crate::stagger::stagger_delays;
use crate::transition::{ColorTrack, Easing, Keyframe, TileTween, Track};

pub struct CascadeAnimator {
    config: CascadeConfig,
    rng: StdRng,
    current_color: Option<Hsl>,
}

impl CascadeAnimator {
    pub fn new(config: CascadeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng, current_color: None }
    }

    /// Color of the most recent cascade, `None` until the first one.
    pub fn current_color(&self) -> Option<Hsl> {
        self.current_color
    }

    /// Starts a cascade from tile `origin` at time `now`.
    ///
    /// Every tile gets the same color and rotation target; only the start
    /// offsets differ. Tweens still in flight are replaced. Does nothing on
    /// an empty grid.
    pub fn trigger(&mut self, grid: &mut TileGrid, origin: usize, now: Duration) {
        let dims = grid.dimensions();
        if dims.is_empty() {
            log::debug!("cascade from {origin} ignored: grid is empty");
            return;
        }
        if !dims.contains(origin) {
            log::warn!(
                "cascade origin {origin} is outside the {}x{} grid",
                dims.columns,
                dims.rows
            );
        }

        // Back to the untransformed pose so every cascade replays the full pulse
        for tile in grid.tiles_mut() {
            tile.visual.scale = 1.0;
            tile.visual.rotation_deg = 0.0;
        }

        let color = Hsl::random(&mut self.rng, &self.config.color);
        self.current_color = Some(color);
        let target = color.to_color32();

        let delays = stagger_delays(dims, origin, self.config.stagger_step(), self.config.metric);
        let pulse = &self.config.pulse;
        let phase = Duration::from_millis(pulse.scale_phase_ms);

        for (tile, delay) in grid.tiles_mut().iter_mut().zip(delays) {
            tile.tween = Some(TileTween {
                started_at: now,
                delay,
                color: ColorTrack {
                    from: tile.visual.color,
                    to: target,
                    duration: Duration::from_millis(pulse.color_ms),
                    easing: Easing::ELASTIC,
                },
                scale: Track::new(
                    tile.visual.scale,
                    vec![
                        Keyframe::new(pulse.scale_low, phase, Easing::EaseOutSine),
                        Keyframe::new(pulse.scale_high, phase, Easing::EaseOutSine),
                    ],
                ),
                rotation: Track::new(
                    tile.visual.rotation_deg,
                    vec![Keyframe::new(
                        pulse.rotation_deg,
                        Duration::from_millis(pulse.rotation_ms),
                        Easing::EaseInOutSine,
                    )],
                ),
            });
        }

        log::debug!("cascade from tile {origin} with {color}");
    }
}
