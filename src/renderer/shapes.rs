//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::Vertex;
use crate::renderer::Color;
use crate::sim::Bounds;

/// Texture coordinates of the quad corners: top-left, top-right,
/// bottom-right, bottom-left
const QUAD_UV: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Emit two triangles from four corners in clockwise order
fn quad_from_corners(corners: [Vec2; 4], color: Color) -> [Vertex; 6] {
    let v = |i: usize| Vertex::new(corners[i].x, corners[i].y, QUAD_UV[i], color);
    [v(0), v(1), v(2), v(0), v(2), v(3)]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(bounds: Bounds, color: Color) -> [Vertex; 6] {
    let min = bounds.min();
    let max = bounds.max();
    quad_from_corners(
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ],
        color,
    )
}

/// Generate vertices for a textured quad rotated clockwise by `rotation`
/// radians about the bounds center and scaled by `scale`
pub fn rotated_quad(bounds: Bounds, rotation: f32, scale: f32, color: Color) -> [Vertex; 6] {
    let center = bounds.center();
    let half = bounds.size * 0.5 * scale;
    // In y-down screen space a positive angle turns clockwise
    let rot = Vec2::from_angle(rotation);
    let corner = |offset: Vec2| center + rot.rotate(offset);
    quad_from_corners(
        [
            corner(Vec2::new(-half.x, -half.y)),
            corner(Vec2::new(half.x, -half.y)),
            corner(Vec2::new(half.x, half.y)),
            corner(Vec2::new(-half.x, half.y)),
        ],
        color,
    )
}
