//! Axis-aligned rectangle geometry
//!
//! Screen space: x grows to the right, y grows downward. A `Bounds` is
//! anchored at its top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::controls::Direction;

/// Fraction of the smaller side an overlap must exceed to count
pub const OVERLAP_SLOP: f32 = 1e-3;

/// Axis-aligned bounding rectangle used for collision queries and drawing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Bounds {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.position + self.size * 0.5
    }

    /// Overlap test that ignores contact. The shared depth must exceed
    /// `OVERLAP_SLOP` times the smaller side on both axes, so segments placed
    /// flush never collide even when rounding leaves a sliver of overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        let slop = OVERLAP_SLOP * self.size.min_element().min(other.size.min_element());
        let depth = self.max().min(other.max()) - self.min().max(other.min());
        depth.x > slop && depth.y > slop
    }

    /// Check if a point lies inside (edges inclusive on the min side)
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x < max.x && point.y >= min.y && point.y < max.y
    }

    /// A rectangle of `size` placed flush against the `direction` side of this
    /// one, centered on the perpendicular axis.
    ///
    /// With equal sizes this is exactly `position + direction.step() * size`.
    pub fn beside(&self, direction: Direction, size: Vec2) -> Bounds {
        let centered = self.position + (self.size - size) * 0.5;
        let position = match direction {
            Direction::Up => Vec2::new(centered.x, self.position.y - size.y),
            Direction::Down => Vec2::new(centered.x, self.position.y + self.size.y),
            Direction::Left => Vec2::new(self.position.x - size.x, centered.y),
            Direction::Right => Vec2::new(self.position.x + self.size.x, centered.y),
        };
        Bounds::new(position, size)
    }
}
