// ui.rs - Painting, click dispatch and viewport tracking

use eframe::egui;
use egui::emath::Rot2;
use egui::{Painter, Shape, Stroke, Vec2};

use crate::app::TileCascadeApp;
use crate::grid::{GridTemplate, Tile};

const TILE_GAP: f32 = 0.5;

impl eframe::App for TileCascadeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = self.now();

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(self.background))
            .show(ctx, |ui| {
                // Every change of the drawable area is a resize: rebuild immediately
                let area = ui.available_rect_before_wrap();
                self.scene.sync_viewport(area);

                if self.startup.poll_fired() {
                    self.scene.startup_cascade(now);
                }

                let (response, painter) = ui.allocate_painter(area.size(), egui::Sense::click());
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        if let Some(index) = self.scene.click_at(pos, now) {
                            log::trace!("click on tile {index}");
                        }
                    }
                }

                self.scene.advance(now);
                let template = *self.scene.template();
                for tile in self.scene.tiles() {
                    paint_tile(&painter, &template, tile);
                }
            });

        if self.scene.is_animating() {
            ctx.request_repaint();
        }
    }
}

/// Draws a tile as a square scaled and rotated about its cell center.
fn paint_tile(painter: &Painter, template: &GridTemplate, tile: &Tile) {
    let Some(cell) = template.cell_rect(tile.index) else {
        return;
    };
    let cell = cell.shrink(TILE_GAP);
    let visual = tile.visual;
    if visual.scale <= 0.0 {
        return;
    }

    let center = cell.center();
    let half = cell.size() * 0.5 * visual.scale;
    let rot = Rot2::from_angle(visual.rotation_deg.to_radians());
    let corners = [
        Vec2::new(-half.x, -half.y),
        Vec2::new(half.x, -half.y),
        Vec2::new(half.x, half.y),
        Vec2::new(-half.x, half.y),
    ]
    .map(|corner| center + rot * corner)
    .to_vec();

    painter.add(Shape::convex_polygon(corners, visual.color, Stroke::NONE));
}
