//! Fields and capabilities shared by every on-screen entity

use std::rc::Rc;

use glam::Vec2;

use super::controls::{Direction, KeyBindings};
use super::geometry::Bounds;
use crate::renderer::{Color, RenderInfo, RenderStrategy, SolidRect, Surface, colors};

/// Common entity state
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner in screen space
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
    /// Pixels per second
    pub movement_speed: f32,
    pub color: Color,
    pub key_bindings: Rc<KeyBindings>,
    pub appearance: Rc<dyn RenderStrategy>,
}

impl Body {
    /// Facing up, drawn as a green `SolidRect`
    pub fn new(position: Vec2, size: Vec2, movement_speed: f32, key_bindings: Rc<KeyBindings>) -> Self {
        Self {
            position,
            size,
            direction: Direction::default(),
            movement_speed,
            color: colors::GREEN,
            key_bindings,
            appearance: Rc::new(SolidRect),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_appearance(mut self, appearance: Rc<dyn RenderStrategy>) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.position, self.size)
    }

    pub fn render_info(&self) -> RenderInfo {
        RenderInfo {
            position: self.position,
            size: self.size,
            direction: self.direction,
            color: self.color,
        }
    }

    /// Draw this body alone with its own strategy
    pub fn draw(&self, surface: &mut dyn Surface) {
        self.appearance.draw(&self.render_info(), surface);
    }
}

/// Read access and rendering common to creatures and tongue segments
pub trait Entity {
    fn body(&self) -> &Body;

    fn position(&self) -> Vec2 {
        self.body().position
    }

    fn size(&self) -> Vec2 {
        self.body().size
    }

    fn direction(&self) -> Direction {
        self.body().direction
    }

    fn movement_speed(&self) -> f32 {
        self.body().movement_speed
    }

    fn key_bindings(&self) -> &KeyBindings {
        &self.body().key_bindings
    }

    /// Bounding rectangle for collision queries
    fn bounds(&self) -> Bounds {
        self.body().bounds()
    }

    /// Draw the entity and anything it owns
    fn render(&self, surface: &mut dyn Surface) {
        self.body().draw(surface);
    }
}
