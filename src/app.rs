// app.rs - The eframe application state

use eframe::egui;
use std::time::{Duration, Instant};

use crate::config::CascadeConfig;
use crate::scene::TileScene;
use crate::startup::StartupTimer;

pub struct TileCascadeApp {
    pub scene: TileScene,
    pub startup: StartupTimer,
    pub background: egui::Color32,
    epoch: Instant,

    // Keeps the startup timer's task alive
    _runtime: tokio::runtime::Runtime,
}

impl TileCascadeApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: CascadeConfig,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        let startup = StartupTimer::schedule(runtime.handle(), config.startup_delay(), move || {
            ctx.request_repaint();
        });
        log::info!(
            "tile unit {}px, stagger {}ms, startup cascade in {}ms",
            config.tile_unit,
            config.stagger_step_ms,
            config.startup_delay_ms
        );

        Self {
            background: config.background_color(),
            scene: TileScene::new(config),
            startup,
            epoch: Instant::now(),
            _runtime: runtime,
        }
    }

    /// Animation clock: time since the window opened.
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}
