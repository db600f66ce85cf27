// grid.rs - Grid Manager: viewport-derived dimensions and the tile collection

use egui::{Color32, Pos2, Rect, Vec2, pos2, vec2};

use crate::color::Hsl;
use crate::transition::{TileTween, TileVisual};

/// Snapshot of the drawable area, in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<Vec2> for Viewport {
    fn from(size: Vec2) -> Self {
        Self::new(size.x, size.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridDimensions {
    pub columns: usize,
    pub rows: usize,
}

impl GridDimensions {
    /// Floor-divides both axes by `unit`; anything smaller than one unit gives zero.
    pub fn from_viewport(viewport: Viewport, unit: f32) -> Self {
        let cells = |extent: f32| {
            if extent.is_finite() && extent > 0.0 && unit > 0.0 {
                (extent / unit).floor() as usize
            } else {
                0
            }
        };
        Self {
            columns: cells(viewport.width),
            rows: cells(viewport.height),
        }
    }

    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len()
    }

    /// `(col, row)` of a linear index. Indices past the end map to rows below
    /// the grid; only a zero column count has no answer.
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if self.columns == 0 {
            return None;
        }
        Some((index % self.columns, index / self.columns))
    }

    pub fn index_of(&self, col: usize, row: usize) -> Option<usize> {
        (col < self.columns && row < self.rows).then(|| row * self.columns + col)
    }

    /// The visually central tile: middle row, middle column (rounded down).
    pub fn center_index(&self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some((self.rows / 2) * self.columns + self.columns / 2)
    }
}

/// Layout published on each rebuild; painting and hit testing read cells from here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTemplate {
    pub dims: GridDimensions,
    pub area: Rect,
}

impl GridTemplate {
    /// Cells stretch so the columns and rows fill the area exactly.
    pub fn cell_size(&self) -> Vec2 {
        if self.dims.is_empty() {
            return Vec2::ZERO;
        }
        vec2(
            self.area.width() / self.dims.columns as f32,
            self.area.height() / self.dims.rows as f32,
        )
    }

    pub fn cell_rect(&self, index: usize) -> Option<Rect> {
        if !self.dims.contains(index) {
            return None;
        }
        let (col, row) = self.dims.position(index)?;
        let size = self.cell_size();
        let min = pos2(
            self.area.min.x + col as f32 * size.x,
            self.area.min.y + row as f32 * size.y,
        );
        Some(Rect::from_min_size(min, size))
    }

    pub fn index_at(&self, pos: Pos2) -> Option<usize> {
        if self.dims.is_empty() || !self.area.contains(pos) {
            return None;
        }
        let size = self.cell_size();
        let col = ((pos.x - self.area.min.x) / size.x).floor() as usize;
        let row = ((pos.y - self.area.min.y) / size.y).floor() as usize;
        // the max edge is inclusive in `Rect::contains`
        self.dims.index_of(
            col.min(self.dims.columns - 1),
            row.min(self.dims.rows - 1),
        )
    }
}

/// Identity of a tile instance; never reused across rebuilds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u64);

#[derive(Clone, Debug)]
pub struct Tile {
    pub index: usize,
    pub id: TileId,
    pub visual: TileVisual,
    pub tween: Option<TileTween>,
}

impl Tile {
    /// Samples the running tween, dropping it once it has settled.
    pub fn advance(&mut self, now: std::time::Duration) {
        if let Some(tween) = &self.tween {
            self.visual = tween.sample(now);
            if tween.is_finished(now) {
                self.tween = None;
            }
        }
    }
}

/// Owns the current dimensions, template and tiles.
#[derive(Debug)]
pub struct TileGrid {
    unit: f32,
    idle_color: Color32,
    template: GridTemplate,
    tiles: Vec<Tile>,
    next_id: u64,
}

impl TileGrid {
    pub fn new(unit: f32, idle_color: Color32) -> Self {
        Self {
            unit,
            idle_color,
            template: GridTemplate {
                dims: GridDimensions::default(),
                area: Rect::NOTHING,
            },
            tiles: Vec::new(),
            next_id: 0,
        }
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.template.dims
    }

    pub fn template(&self) -> &GridTemplate {
        &self.template
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut [Tile] {
        &mut self.tiles
    }

    pub fn is_animating(&self) -> bool {
        self.tiles.iter().any(|tile| tile.tween.is_some())
    }

    /// Recomputes dimensions for `area` and replaces every tile.
    ///
    /// New tiles take `current_color` as their base when a cascade has
    /// already run, so a resize keeps the last color without replaying it.
    pub fn rebuild(&mut self, area: Rect, current_color: Option<Hsl>) -> GridDimensions {
        let dims = GridDimensions::from_viewport(Viewport::from(area.size()), self.unit);
        let base = current_color.map_or(self.idle_color, Hsl::to_color32);

        self.tiles.clear();
        self.tiles.reserve(dims.len());
        for index in 0..dims.len() {
            let id = TileId(self.next_id);
            self.next_id += 1;
            self.tiles.push(Tile {
                index,
                id,
                visual: TileVisual::resting(base),
                tween: None,
            });
        }

        self.template = GridTemplate { dims, area };
        log::debug!(
            "rebuilt grid: {} columns x {} rows ({} tiles) for {:.0}x{:.0}",
            dims.columns,
            dims.rows,
            dims.len(),
            area.width(),
            area.height()
        );
        dims
    }

    pub fn tile_at(&self, pos: Pos2) -> Option<usize> {
        self.template.index_at(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(width: f32, height: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(width, height))
    }

    #[test]
    fn dimensions_floor_divide_viewport() {
        let dims = GridDimensions::from_viewport(Viewport::new(1024.0, 768.0), 50.0);
        assert_eq!(dims, GridDimensions { columns: 20, rows: 15 });

        let dims = GridDimensions::from_viewport(Viewport::new(40.0, 40.0), 50.0);
        assert_eq!(dims, GridDimensions { columns: 0, rows: 0 });
        assert!(dims.is_empty());

        let dims = GridDimensions::from_viewport(Viewport::new(100.0, 49.9), 50.0);
        assert_eq!(dims, GridDimensions { columns: 2, rows: 0 });

        let dims = GridDimensions::from_viewport(Viewport::new(-10.0, f32::NAN), 50.0);
        assert_eq!(dims, GridDimensions::default());
    }

    #[test]
    fn positions_are_row_major() {
        let dims = GridDimensions { columns: 4, rows: 3 };
        assert_eq!(dims.position(0), Some((0, 0)));
        assert_eq!(dims.position(3), Some((3, 0)));
        assert_eq!(dims.position(4), Some((0, 1)));
        assert_eq!(dims.position(11), Some((3, 2)));
        assert_eq!(dims.index_of(3, 2), Some(11));
        assert_eq!(dims.index_of(4, 0), None);
        assert_eq!(GridDimensions { columns: 0, rows: 3 }.position(0), None);
    }

    #[test]
    fn center_uses_floored_halves() {
        assert_eq!(GridDimensions { columns: 20, rows: 15 }.center_index(), Some(7 * 20 + 10));
        assert_eq!(GridDimensions { columns: 1, rows: 1 }.center_index(), Some(0));
        assert_eq!(GridDimensions { columns: 4, rows: 4 }.center_index(), Some(10));
        assert_eq!(GridDimensions { columns: 0, rows: 4 }.center_index(), None);
    }

    #[test]
    fn rebuild_creates_one_tile_per_cell() {
        let mut grid = TileGrid::new(50.0, Color32::DARK_GRAY);
        let dims = grid.rebuild(area(1024.0, 768.0), None);
        assert_eq!(dims.len(), 300);
        assert_eq!(grid.tiles().len(), 300);
        for (i, tile) in grid.tiles().iter().enumerate() {
            assert_eq!(tile.index, i);
            assert_eq!(tile.visual, TileVisual::resting(Color32::DARK_GRAY));
            assert!(tile.tween.is_none());
        }
        assert_eq!(grid.template().dims, dims);
    }

    #[test]
    fn rebuild_replaces_tile_identities() {
        let mut grid = TileGrid::new(50.0, Color32::DARK_GRAY);
        let first = grid.rebuild(area(300.0, 200.0), None);
        let old_ids: Vec<TileId> = grid.tiles().iter().map(|t| t.id).collect();

        let second = grid.rebuild(area(300.0, 200.0), None);
        assert_eq!(first, second);
        assert!(grid.tiles().iter().all(|t| !old_ids.contains(&t.id)));
    }

    #[test]
    fn rebuild_uses_current_color_as_base() {
        let mut grid = TileGrid::new(50.0, Color32::DARK_GRAY);
        let color = Hsl::new(120, 100, 50);
        grid.rebuild(area(200.0, 100.0), Some(color));
        assert!(grid.tiles().iter().all(|t| t.visual.color == color.to_color32()));
    }

    #[test]
    fn small_viewport_gives_empty_grid() {
        let mut grid = TileGrid::new(50.0, Color32::DARK_GRAY);
        grid.rebuild(area(300.0, 300.0), None);
        grid.rebuild(area(40.0, 40.0), None);
        assert!(grid.tiles().is_empty());
        assert_eq!(grid.tile_at(pos2(10.0, 10.0)), None);
    }

    #[test]
    fn cells_stretch_to_fill_area() {
        let template = GridTemplate {
            dims: GridDimensions { columns: 2, rows: 2 },
            area: Rect::from_min_size(pos2(10.0, 20.0), vec2(120.0, 110.0)),
        };
        assert_eq!(template.cell_size(), vec2(60.0, 55.0));
        assert_eq!(
            template.cell_rect(3),
            Some(Rect::from_min_size(pos2(70.0, 75.0), vec2(60.0, 55.0)))
        );
        assert_eq!(template.cell_rect(4), None);
    }

    #[test]
    fn hit_testing_maps_points_to_indices() {
        let mut grid = TileGrid::new(50.0, Color32::DARK_GRAY);
        grid.rebuild(area(200.0, 150.0), None);
        assert_eq!(grid.tile_at(pos2(0.0, 0.0)), Some(0));
        assert_eq!(grid.tile_at(pos2(75.0, 10.0)), Some(1));
        assert_eq!(grid.tile_at(pos2(60.0, 120.0)), Some(9));
        assert_eq!(grid.tile_at(pos2(200.0, 150.0)), Some(11));
        assert_eq!(grid.tile_at(pos2(250.0, 10.0)), None);
    }
}
