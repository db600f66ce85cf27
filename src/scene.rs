// scene.rs - Owns the grid and the animator, and wires resize/click/startup

use egui::{Color32, Pos2, Rect};
use std::time::Duration;

use crate::cascade::CascadeAnimator;
use crate::color::Hsl;
use crate::config::CascadeConfig;
use crate::grid::{GridDimensions, GridTemplate, Tile, TileGrid};

/// One independent tile grid with its own color and animation state.
pub struct TileScene {
    grid: TileGrid,
    animator: CascadeAnimator,
    area: Option<Rect>,
}

impl TileScene {
    pub fn new(config: CascadeConfig) -> Self {
        let [r, g, b] = config.idle_color;
        Self {
            grid: TileGrid::new(config.tile_unit, Color32::from_rgb(r, g, b)),
            animator: CascadeAnimator::new(config),
            area: None,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.grid.dimensions()
    }

    pub fn template(&self) -> &GridTemplate {
        self.grid.template()
    }

    pub fn tiles(&self) -> &[Tile] {
        self.grid.tiles()
    }

    pub fn current_color(&self) -> Option<Hsl> {
        self.animator.current_color()
    }

    pub fn is_animating(&self) -> bool {
        self.grid.is_animating()
    }

    /// Rebuilds when `area` differs from the last one seen. Returns whether a
    /// rebuild happened; the first call always rebuilds.
    pub fn sync_viewport(&mut self, area: Rect) -> bool {
        if self.area == Some(area) {
            return false;
        }
        self.resize(area);
        true
    }

    /// Discards every tile and builds a fresh set for `area`. Never animates.
    pub fn resize(&mut self, area: Rect) -> GridDimensions {
        self.area = Some(area);
        self.grid.rebuild(area, self.animator.current_color())
    }

    pub fn click(&mut self, index: usize, now: Duration) {
        self.animator.trigger(&mut self.grid, index, now);
    }

    pub fn click_at(&mut self, pos: Pos2, now: Duration) -> Option<usize> {
        let index = self.grid.tile_at(pos)?;
        self.click(index, now);
        Some(index)
    }

    /// The automatic first cascade, centred on the dimensions current right now.
    pub fn startup_cascade(&mut self, now: Duration) -> Option<usize> {
        let center = self.dimensions().center_index()?;
        log::info!("startup cascade from tile {center}");
        self.click(center, now);
        Some(center)
    }

    pub fn advance(&mut self, now: Duration) {
        for tile in self.grid.tiles_mut() {
            tile.advance(now);
        }
    }
}
