// crates/garden-core/src/primitives.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in layout space, y pointing down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Shared edges do not count as an intersection.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.position.x + self.size.x <= other.position.x
            || other.position.x + other.size.x <= self.position.x
            || self.position.y + self.size.y <= other.position.y
            || other.position.y + other.size.y <= self.position.y)
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    pub fn min(&self) -> Vec2 {
        self.position
    }

    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }
}

/// Where and how one flower is drawn. Recomputed on every layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub flower_id: String,
    /// Top-left corner of the flower footprint.
    pub position: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub scale: f32,
}

impl Placement {
    pub fn footprint(&self, flower_size: f32) -> Rect {
        Rect::from_position_size(self.position, Vec2::splat(flower_size))
    }
}
