// stagger.rs - Per-tile start offsets radiating from a trigger tile

use serde::Deserialize;
use std::time::Duration;

use crate::grid::GridDimensions;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance, rounded to two decimals.
    #[default]
    Euclidean,
    Manhattan,
    Chebyshev,
}

impl DistanceMetric {
    pub fn distance(self, from: (usize, usize), to: (usize, usize)) -> f32 {
        let dx = from.0.abs_diff(to.0) as f32;
        let dy = from.1.abs_diff(to.1) as f32;
        match self {
            DistanceMetric::Euclidean => ((dx * dx + dy * dy).sqrt() * 100.0).round() / 100.0,
            DistanceMetric::Manhattan => dx + dy,
            DistanceMetric::Chebyshev => dx.max(dy),
        }
    }
}

/// Start offset of every tile in `dims` for a cascade originating at `origin`.
///
/// Positions are derived from the linear indices with the column count of
/// `dims`, so an origin past the last row still yields a well-defined pattern.
/// Returns an empty vector for an empty grid.
pub fn stagger_delays(
    dims: GridDimensions,
    origin: usize,
    step: Duration,
    metric: DistanceMetric,
) -> Vec<Duration> {
    let Some(from) = dims.position(origin) else {
        return Vec::new();
    };
    (0..dims.len())
        .filter_map(|index| dims.position(index))
        .map(|to| scale_step(step, metric.distance(from, to)))
        .collect()
}

fn scale_step(step: Duration, distance: f32) -> Duration {
    let micros = step.as_micros() as f64 * distance as f64;
    Duration::from_micros(micros.round() as u64)
}
