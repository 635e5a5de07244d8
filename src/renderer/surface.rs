//! Drawing surface capability
//!
//! The simulation never looks inside a surface; it only issues draw calls.

use serde::{Deserialize, Serialize};

use crate::sim::Bounds;

/// RGBA color, components in 0.0..=1.0
pub type Color = [f32; 4];

/// Handle to a sprite image owned by whoever implements the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteId(pub u32);

/// Primitive drawing operations
pub trait Surface {
    /// Filled axis-aligned rectangle
    fn fill_rect(&mut self, bounds: Bounds, color: Color);

    /// Image blit into `bounds`, rotated clockwise by `rotation` radians about
    /// the bounds center and scaled by `scale`
    fn blit(&mut self, sprite: SpriteId, bounds: Bounds, rotation: f32, scale: f32);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect {
        bounds: Bounds,
        color: Color,
    },
    Sprite {
        sprite: SpriteId,
        bounds: Bounds,
        rotation: f32,
        scale: f32,
    },
}

impl DrawCall {
    pub fn bounds(&self) -> Bounds {
        match self {
            DrawCall::Rect { bounds, .. } | DrawCall::Sprite { bounds, .. } => *bounds,
        }
    }
}

/// Surface that remembers every draw call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.calls.push(DrawCall::Rect { bounds, color });
    }

    fn blit(&mut self, sprite: SpriteId, bounds: Bounds, rotation: f32, scale: f32) {
        self.calls.push(DrawCall::Sprite {
            sprite,
            bounds,
            rotation,
            scale,
        });
    }
}
