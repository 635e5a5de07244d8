//! Pluggable per-entity appearance

use std::fmt::Debug;

use glam::Vec2;

use super::surface::{Color, SpriteId, Surface};
use crate::sim::{Bounds, Direction};

/// Everything a render strategy may look at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInfo {
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    pub color: Color,
}

impl RenderInfo {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }
}

/// How an entity draws itself. Set once at construction.
pub trait RenderStrategy: Debug {
    fn draw(&self, info: &RenderInfo, surface: &mut dyn Surface);
}

/// Flat rectangle in the entity's color (the default look)
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidRect;

impl RenderStrategy for SolidRect {
    fn draw(&self, info: &RenderInfo, surface: &mut dyn Surface) {
        surface.fill_rect(info.bounds(), info.color);
    }
}

/// Sprite rotated to face the entity's direction
#[derive(Debug, Clone, Copy)]
pub struct DirectionalSprite {
    pub sprite: SpriteId,
    pub scale: f32,
}

impl DirectionalSprite {
    pub fn new(sprite: SpriteId) -> Self {
        Self { sprite, scale: 1.0 }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl RenderStrategy for DirectionalSprite {
    fn draw(&self, info: &RenderInfo, surface: &mut dyn Surface) {
        surface.blit(
            self.sprite,
            info.bounds(),
            info.direction.rotation(),
            self.scale,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCall, RecordingSurface};

    fn info(direction: Direction) -> RenderInfo {
        RenderInfo {
            position: Vec2::new(5.0, 6.0),
            size: Vec2::new(10.0, 10.0),
            direction,
            color: [0.0, 1.0, 0.0, 1.0],
        }
    }

    #[test]
    fn test_solid_rect_draws_bounds() {
        let mut surface = RecordingSurface::new();
        SolidRect.draw(&info(Direction::Up), &mut surface);
        assert_eq!(
            surface.calls,
            vec![DrawCall::Rect {
                bounds: Bounds::new(Vec2::new(5.0, 6.0), Vec2::new(10.0, 10.0)),
                color: [0.0, 1.0, 0.0, 1.0],
            }]
        );
    }

    #[test]
    fn test_sprite_rotation_follows_direction() {
        let strategy = DirectionalSprite::new(SpriteId(3)).with_scale(2.0);
        let mut surface = RecordingSurface::new();
        strategy.draw(&info(Direction::Right), &mut surface);
        match &surface.calls[0] {
            DrawCall::Sprite {
                sprite,
                rotation,
                scale,
                ..
            } => {
                assert_eq!(*sprite, SpriteId(3));
                assert!((rotation - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
                assert_eq!(*scale, 2.0);
            }
            other => panic!("expected sprite blit, got {other:?}"),
        }
    }
}
