// crates/garden-core/src/viewport.rs
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{GardenError, Result};

/// Visible area in device-independent pixels. Read fresh on every layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Width over height, or 1.0 when the height is unusable.
    pub fn aspect(&self) -> f32 {
        if self.height > 0.0 && self.height.is_finite() && self.width.is_finite() {
            self.width / self.height
        } else {
            1.0
        }
    }

    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }

    pub fn validate(self) -> Result<Self> {
        if self.is_degenerate() {
            return Err(GardenError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect() {
        assert_eq!(Viewport::new(800.0, 400.0).aspect(), 2.0);
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
    }

    #[test]
    fn test_degenerate_viewports_rejected() {
        assert!(Viewport::new(0.0, 400.0).validate().is_err());
        assert!(Viewport::new(400.0, f32::NAN).validate().is_err());
        assert!(Viewport::new(400.0, 300.0).validate().is_ok());
    }
}
