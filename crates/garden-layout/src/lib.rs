// crates/garden-layout/src/lib.rs

use garden_core::{canonical_order, FlowerRecord, Placement, Viewport};
use glam::Vec2;
use tracing::debug;

pub mod bloom;
pub mod frame;
pub mod grid;
pub mod rng;
pub mod zones;

pub use bloom::*;
pub use frame::*;
pub use grid::*;
pub use rng::*;
pub use zones::*;

/// Salt for the cell shuffle so it never replays the first flower's jitter stream.
const SHUFFLE_SALT: i32 = 0x1B87_3593;

pub trait GardenLayout {
    /// One placement per flower, in canonical (ascending id) order.
    fn compute_layout(
        &self,
        flowers: &[FlowerRecord],
        viewport: Viewport,
        flower_size: f32,
    ) -> Vec<Placement>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Share of a cell's extent a flower may wander from the cell center.
    pub jitter_fraction: f32,
    /// Rotation is drawn from `[-max_rotation, max_rotation]` degrees.
    pub max_rotation: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Minimum offset from the top/left edge, as a multiple of the footprint.
    pub padding_ratio: f32,
    /// Center distance below which two flowers count as crowded.
    pub min_separation_ratio: f32,
    pub zones: Vec<ExclusionZone>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            jitter_fraction: 0.7,
            max_rotation: 10.0,
            min_scale: 0.85,
            max_scale: 1.15,
            padding_ratio: 0.5,
            min_separation_ratio: 0.8,
            zones: vec![ExclusionZone::bottom_left(), ExclusionZone::bottom_right()],
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jitter_fraction(mut self, jitter_fraction: f32) -> Self {
        self.jitter_fraction = jitter_fraction;
        self
    }

    pub fn with_padding_ratio(mut self, padding_ratio: f32) -> Self {
        self.padding_ratio = padding_ratio;
        self
    }

    pub fn without_zones(mut self) -> Self {
        self.zones.clear();
        self
    }
}

/// Aspect-matched grid, shuffled cells, bounded jitter inside each cell.
#[derive(Debug, Default)]
pub struct GridJitterLayout {
    config: LayoutConfig,
    debug: bool,
}

impl GridJitterLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    fn place_flower(
        &self,
        flower: &FlowerRecord,
        cell: garden_core::Rect,
        region: Vec2,
        flower_size: f32,
        min: Vec2,
        max: Vec2,
    ) -> Placement {
        let mut rng = make_rng(seed_from_id(&flower.id));

        let reach = cell.size * self.config.jitter_fraction;
        let jitter = Vec2::new(rng.range(-0.5, 0.5) * reach.x, rng.range(-0.5, 0.5) * reach.y);
        let rotation = rng.range(-self.config.max_rotation, self.config.max_rotation);
        let scale = rng.range(self.config.min_scale, self.config.max_scale);

        let mut position = (cell.center() - Vec2::splat(flower_size * 0.5) + jitter).clamp(min, max);
        for zone in &self.config.zones {
            position = zone.relocate(position, flower_size, region);
        }
        let position = position.clamp(Vec2::ZERO, max);

        if self.debug {
            debug!(
                "Flower {}: cell={:?}, jitter={:?}, pos={:?}, rot={:.2}, scale={:.3}",
                flower.id, cell.position, jitter, position, rotation, scale
            );
        }

        Placement {
            flower_id: flower.id.clone(),
            position,
            rotation,
            scale,
        }
    }
}

impl GardenLayout for GridJitterLayout {
    fn compute_layout(
        &self,
        flowers: &[FlowerRecord],
        viewport: Viewport,
        flower_size: f32,
    ) -> Vec<Placement> {
        let sorted = canonical_order(flowers);
        let Some(first) = sorted.first() else {
            return Vec::new();
        };

        let region = viewport.as_vec2();
        let grid = GridSize::for_count(sorted.len(), viewport.aspect());

        let mut cells: Vec<usize> = (0..grid.capacity()).collect();
        let mut shuffle_rng = make_rng(seed_from_id(&first.id) ^ SHUFFLE_SALT);
        shuffle(&mut cells, &mut shuffle_rng);

        // Lower bound never exceeds the upper one, even when the region is
        // smaller than a single footprint.
        let max = (region - Vec2::splat(flower_size)).max(Vec2::ZERO);
        let min = Vec2::splat(flower_size * self.config.padding_ratio).min(max);

        if self.debug {
            debug!(
                "Garden layout: {} flowers, viewport={:?}, grid={}x{}, flower_size={:.1}",
                sorted.len(),
                region,
                grid.cols,
                grid.rows,
                flower_size
            );
        }

        let placements: Vec<Placement> = sorted
            .iter()
            .zip(&cells)
            .map(|(flower, &cell)| {
                self.place_flower(flower, grid.cell_rect(cell, region), region, flower_size, min, max)
            })
            .collect();

        if self.debug {
            let crowded = crowded_pairs(&placements, flower_size * self.config.min_separation_ratio);
            if !crowded.is_empty() {
                debug!("{} flower pairs closer than the separation threshold", crowded.len());
            }
        }

        placements
    }
}

/// Layout with the default grid-jitter engine.
pub fn compute_layout(flowers: &[FlowerRecord], viewport: Viewport, flower_size: f32) -> Vec<Placement> {
    GridJitterLayout::new().compute_layout(flowers, viewport, flower_size)
}

/// Index pairs whose center distance is below `min_distance`. Quadratic; for
/// diagnostics only.
pub fn crowded_pairs(placements: &[Placement], min_distance: f32) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in placements.iter().enumerate() {
        for (j, b) in placements.iter().enumerate().skip(i + 1) {
            if a.position.distance(b.position) < min_distance {
                pairs.push((i, j));
            }
        }
    }
    pairs
}
