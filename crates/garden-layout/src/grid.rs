// crates/garden-layout/src/grid.rs
use garden_core::Rect;
use glam::Vec2;

/// Cell grid covering the layout region, shaped to match its aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    /// Smallest aspect-matched grid with room for `count` flowers.
    pub fn for_count(count: usize, aspect: f32) -> Self {
        if count == 0 {
            return Self { cols: 0, rows: 0 };
        }

        let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
        let mut cols = ((count as f32 * aspect).sqrt().round() as usize).max(1);
        let rows = count.div_ceil(cols);
        while cols * rows < count {
            cols += 1;
        }

        Self { cols, rows }
    }

    pub fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    /// Rectangle of cell `index` (row-major) inside a region of `region_size`.
    pub fn cell_rect(&self, index: usize, region_size: Vec2) -> Rect {
        let cell_size = Vec2::new(
            region_size.x / self.cols.max(1) as f32,
            region_size.y / self.rows.max(1) as f32,
        );
        let col = index % self.cols.max(1);
        let row = index / self.cols.max(1);
        Rect::from_position_size(Vec2::new(col as f32, row as f32) * cell_size, cell_size)
    }
}
