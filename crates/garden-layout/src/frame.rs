// crates/garden-layout/src/frame.rs
//! Fits the garden between the page header and the bottom action bar.

use garden_core::{FlowerRecord, Placement, Viewport};
use glam::Vec2;

use crate::GardenLayout;

pub const MIN_FLOWER_SIZE: f32 = 50.0;
pub const MAX_FLOWER_SIZE: f32 = 90.0;
/// Flowers shrink with the window: one twelfth of its width, within the bounds above.
pub const FLOWER_SIZE_DIVISOR: f32 = 12.0;
pub const HEADER_FRACTION: f32 = 0.14;
pub const USABLE_HEIGHT_FRACTION: f32 = 0.76;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GardenFrame {
    pub viewport: Viewport,
    /// Region handed to the layout engine.
    pub region: Viewport,
    pub top_offset: f32,
    pub flower_size: f32,
}

impl GardenFrame {
    pub fn from_viewport(viewport: Viewport) -> Self {
        let flower_size = (viewport.width / FLOWER_SIZE_DIVISOR).clamp(MIN_FLOWER_SIZE, MAX_FLOWER_SIZE);
        Self {
            viewport,
            region: Viewport::new(viewport.width, viewport.height * USABLE_HEIGHT_FRACTION),
            top_offset: viewport.height * HEADER_FRACTION,
            flower_size,
        }
    }

    /// The whole viewport, no header or footer band.
    pub fn full(viewport: Viewport, flower_size: f32) -> Self {
        Self {
            viewport,
            region: viewport,
            top_offset: 0.0,
            flower_size,
        }
    }

    pub fn with_flower_size(mut self, flower_size: f32) -> Self {
        self.flower_size = flower_size;
        self
    }

    /// Lay out `flowers` inside the band, in viewport coordinates.
    pub fn place<L: GardenLayout + ?Sized>(&self, engine: &L, flowers: &[FlowerRecord]) -> Vec<Placement> {
        let offset = Vec2::new(0.0, self.top_offset);
        engine
            .compute_layout(flowers, self.region, self.flower_size)
            .into_iter()
            .map(|placement| Placement {
                position: placement.position + offset,
                ..placement
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridJitterLayout;

    #[test]
    fn test_flower_size_tracks_width_within_bounds() {
        assert_eq!(GardenFrame::from_viewport(Viewport::new(360.0, 640.0)).flower_size, 50.0);
        assert_eq!(GardenFrame::from_viewport(Viewport::new(840.0, 600.0)).flower_size, 70.0);
        assert_eq!(GardenFrame::from_viewport(Viewport::new(1920.0, 1080.0)).flower_size, 90.0);
    }

    #[test]
    fn test_band_geometry() {
        let frame = GardenFrame::from_viewport(Viewport::new(1000.0, 1000.0));
        assert_eq!(frame.top_offset, 140.0);
        assert_eq!(frame.region, Viewport::new(1000.0, 760.0));
    }

    #[test]
    fn test_placements_stay_inside_band() {
        let frame = GardenFrame::from_viewport(Viewport::new(1280.0, 800.0));
        let flowers: Vec<FlowerRecord> = (0..60)
            .map(|i| FlowerRecord::new(format!("id-{}", i), "x.png"))
            .collect();
        let placements = frame.place(&GridJitterLayout::new(), &flowers);
        assert_eq!(placements.len(), 60);
        let top = frame.top_offset;
        let bottom = frame.top_offset + frame.region.height - frame.flower_size;
        for p in placements {
            assert!(p.position.y >= top - 1e-3 && p.position.y <= bottom + 1e-3, "{:?}", p);
        }
    }

    #[test]
    fn test_full_frame_matches_engine() {
        let viewport = Viewport::new(400.0, 400.0);
        let flowers = vec![FlowerRecord::new("a", "a.png")];
        let engine = GridJitterLayout::new();
        let framed = GardenFrame::full(viewport, 60.0).place(&engine, &flowers);
        assert_eq!(framed, engine.compute_layout(&flowers, viewport, 60.0));
    }
}
