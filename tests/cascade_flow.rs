use egui::{Pos2, Rect, pos2, vec2};
use std::collections::HashSet;
use std::time::Duration;

use tile_cascade::grid::GridDimensions;
use tile_cascade::stagger::DistanceMetric;
use tile_cascade::{CascadeConfig, TileScene};

fn window(width: f32, height: f32) -> Rect {
    Rect::from_min_size(Pos2::ZERO, vec2(width, height))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn click_ripples_then_settles() {
    let mut scene = TileScene::new(CascadeConfig { seed: Some(11), ..CascadeConfig::default() });
    scene.sync_viewport(window(1024.0, 768.0));
    assert_eq!(scene.dimensions(), GridDimensions { columns: 20, rows: 15 });
    assert_eq!(scene.tiles().len(), 300);

    // tile (3, 2)
    let clicked = scene.click_at(pos2(170.0, 120.0), ms(0)).unwrap();
    assert_eq!(clicked, 43);

    // at 60ms only tiles within distance 1.2 have left their start state
    scene.advance(ms(60));
    let moved: HashSet<usize> = scene
        .tiles()
        .iter()
        .filter(|t| t.visual.scale != 1.0)
        .map(|t| t.index)
        .collect();
    assert!(moved.contains(&43));
    assert!(moved.contains(&42) && moved.contains(&44) && moved.contains(&23) && moved.contains(&63));
    assert!(!moved.contains(&0));
    assert!(!moved.contains(&299));

    scene.advance(ms(10_000));
    assert!(!scene.is_animating());
    let target = scene.current_color().unwrap().to_color32();
    assert!(scene.tiles().iter().all(|t| t.visual.color == target && t.visual.rotation_deg == 90.0));
}

#[test]
fn resize_mid_cascade_starts_fresh() {
    let mut scene = TileScene::new(CascadeConfig { seed: Some(5), ..CascadeConfig::default() });
    scene.sync_viewport(window(600.0, 400.0));
    let before: HashSet<_> = scene.tiles().iter().map(|t| t.id).collect();
    scene.click(10, ms(0));
    scene.advance(ms(50));

    scene.sync_viewport(window(320.0, 260.0));
    assert_eq!(scene.dimensions(), GridDimensions { columns: 6, rows: 5 });
    assert_eq!(scene.tiles().len(), 30);
    assert!(!scene.is_animating());
    for (i, tile) in scene.tiles().iter().enumerate() {
        assert_eq!(tile.index, i);
        assert!(!before.contains(&tile.id));
        assert_eq!(tile.visual.scale, 1.0);
    }
}

#[test]
fn chebyshev_rings_share_delays() {
    let config = CascadeConfig {
        seed: Some(1),
        metric: DistanceMetric::Chebyshev,
        ..CascadeConfig::default()
    };
    let mut scene = TileScene::new(config);
    scene.sync_viewport(window(250.0, 250.0));
    let center = scene.startup_cascade(ms(1000)).unwrap();
    assert_eq!(center, 12);

    let delay = |i: usize| scene.tiles()[i].tween.as_ref().unwrap().delay;
    assert_eq!(delay(12), Duration::ZERO);
    for ring_one in [6, 7, 8, 11, 13, 16, 17, 18] {
        assert_eq!(delay(ring_one), ms(50));
    }
    for corner in [0, 4, 20, 24] {
        assert_eq!(delay(corner), ms(100));
    }
}

#[test]
fn second_click_rotates_again() {
    let mut scene = TileScene::new(CascadeConfig { seed: Some(2), ..CascadeConfig::default() });
    scene.sync_viewport(window(150.0, 150.0));

    scene.click(4, ms(0));
    scene.advance(ms(100));
    let first_mid = scene.tiles()[4].visual.rotation_deg;
    scene.advance(ms(5000));
    assert_eq!(scene.tiles()[4].visual.rotation_deg, 90.0);

    scene.click(4, ms(5000));
    scene.advance(ms(5100));
    let second_mid = scene.tiles()[4].visual.rotation_deg;
    assert!(second_mid < 89.0);
    assert!((second_mid - first_mid).abs() < 1e-3);
}
