// lib.rs - Full-window tile grid with click-triggered color cascades

pub mod app;       // eframe application state
pub mod cascade;   // Cascade Animator
pub mod color;     // HSL colors
pub mod config;    // Tunable constants and settings file
pub mod grid;      // Grid Manager
pub mod scene;     // Grid + animator controller
pub mod stagger;   // Distance-based start offsets
pub mod startup;   // One-shot startup timer
pub mod transition; // Eased tweens with per-tile delay
mod ui;            // eframe::App impl

pub use app::TileCascadeApp;
pub use config::CascadeConfig;
pub use scene::TileScene;
