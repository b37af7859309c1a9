// crates/garden-layout/src/zones.rs
use garden_core::Rect;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// Reserved area for decorations, sized as a fraction of the layout region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub corner: Corner,
    pub width_fraction: f32,
    pub height_fraction: f32,
}

impl ExclusionZone {
    pub const DEFAULT_WIDTH_FRACTION: f32 = 0.15;
    pub const DEFAULT_HEIGHT_FRACTION: f32 = 0.18;

    pub fn bottom_left() -> Self {
        Self {
            corner: Corner::BottomLeft,
            width_fraction: Self::DEFAULT_WIDTH_FRACTION,
            height_fraction: Self::DEFAULT_HEIGHT_FRACTION,
        }
    }

    pub fn bottom_right() -> Self {
        Self {
            corner: Corner::BottomRight,
            width_fraction: Self::DEFAULT_WIDTH_FRACTION,
            height_fraction: Self::DEFAULT_HEIGHT_FRACTION,
        }
    }

    pub fn rect(&self, region: Vec2) -> Rect {
        let size = Vec2::new(region.x * self.width_fraction, region.y * self.height_fraction);
        let x = match self.corner {
            Corner::BottomLeft => 0.0,
            Corner::BottomRight => region.x - size.x,
        };
        Rect::from_position_size(Vec2::new(x, region.y - size.y), size)
    }

    pub fn overlaps(&self, position: Vec2, flower_size: f32, region: Vec2) -> bool {
        Rect::from_position_size(position, Vec2::splat(flower_size)).intersects(&self.rect(region))
    }

    /// Move a footprint that lands in the zone to just above it. Going up
    /// alone already clears the zone, so the inward step is only taken when
    /// the region is too short to fit the flower above the zone.
    ///
    /// Never resamples, so placement stays a single pass. Several flowers can
    /// end up on the same corrected edge.
    pub fn relocate(&self, position: Vec2, flower_size: f32, region: Vec2) -> Vec2 {
        if !self.overlaps(position, flower_size, region) {
            return position;
        }

        let zone = self.rect(region);
        let above = zone.min().y - flower_size;
        if above >= 0.0 {
            return Vec2::new(position.x, above);
        }

        let x = match self.corner {
            Corner::BottomLeft => zone.max().x,
            Corner::BottomRight => zone.min().x - flower_size,
        };
        Vec2::new(x, position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGION: Vec2 = Vec2::new(400.0, 400.0);

    #[test]
    fn test_zone_rects_hug_bottom_corners() {
        let left = ExclusionZone::bottom_left().rect(REGION);
        assert!(left.position.abs_diff_eq(Vec2::new(0.0, 328.0), 1e-3));
        assert!(left.max().abs_diff_eq(Vec2::new(60.0, 400.0), 1e-3));

        let right = ExclusionZone::bottom_right().rect(REGION);
        assert!(right.position.abs_diff_eq(Vec2::new(340.0, 328.0), 1e-3));
        assert!(right.max().abs_diff_eq(REGION, 1e-3));
    }

    #[test]
    fn test_outside_position_untouched() {
        let zone = ExclusionZone::bottom_left();
        let pos = Vec2::new(200.0, 300.0);
        assert_eq!(zone.relocate(pos, 60.0, REGION), pos);
    }

    #[test]
    fn test_inside_position_pushed_above() {
        let zone = ExclusionZone::bottom_left();
        let moved = zone.relocate(Vec2::new(20.0, 320.0), 60.0, REGION);
        assert_eq!(moved, Vec2::new(20.0, 268.0));
        assert!(!zone.overlaps(moved, 60.0, REGION));
    }

    #[test]
    fn test_short_region_pushes_inward() {
        let region = Vec2::new(400.0, 30.0);
        let zone = ExclusionZone::bottom_right();
        let moved = zone.relocate(Vec2::new(360.0, 0.0), 40.0, region);
        assert!(moved.abs_diff_eq(Vec2::new(300.0, 0.0), 1e-3));
        assert!(!zone.overlaps(moved, 40.0, region));
    }
}
