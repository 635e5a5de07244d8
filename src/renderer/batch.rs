//! CPU-side vertex batching
//!
//! `VertexSurface` turns draw calls into triangle lists ready for upload.
//! Batches are split whenever the texture changes, so submitting them in
//! order reproduces the draw order exactly.

use super::shapes;
use super::surface::{Color, SpriteId, Surface};
use super::vertex::{Vertex, colors};
use crate::sim::Bounds;

/// Triangles sharing one texture (`None` for flat fills)
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    pub texture: Option<SpriteId>,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, Default)]
pub struct VertexSurface {
    batches: Vec<Batch>,
}

impl VertexSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all batches (call at the start of a frame)
    pub fn clear(&mut self) {
        self.batches.clear();
    }

    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|b| b.vertices.len()).sum()
    }

    /// Raw bytes of one batch, for a GPU buffer write
    pub fn batch_bytes(batch: &Batch) -> &[u8] {
        bytemuck::cast_slice(&batch.vertices)
    }

    fn push(&mut self, texture: Option<SpriteId>, vertices: [Vertex; 6]) {
        match self.batches.last_mut() {
            Some(last) if last.texture == texture => last.vertices.extend_from_slice(&vertices),
            _ => self.batches.push(Batch {
                texture,
                vertices: vertices.to_vec(),
            }),
        }
    }
}

impl Surface for VertexSurface {
    fn fill_rect(&mut self, bounds: Bounds, color: Color) {
        self.push(None, shapes::rect(bounds, color));
    }

    fn blit(&mut self, sprite: SpriteId, bounds: Bounds, rotation: f32, scale: f32) {
        self.push(
            Some(sprite),
            shapes::rotated_quad(bounds, rotation, scale, colors::WHITE),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn unit(x: f32) -> Bounds {
        Bounds::new(Vec2::new(x, 0.0), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_adjacent_fills_share_a_batch() {
        let mut surface = VertexSurface::new();
        surface.fill_rect(unit(0.0), colors::GREEN);
        surface.fill_rect(unit(1.0), colors::RED);
        assert_eq!(surface.batches().len(), 1);
        assert_eq!(surface.vertex_count(), 12);
    }

    #[test]
    fn test_texture_change_splits_batches_in_order() {
        let mut surface = VertexSurface::new();
        surface.fill_rect(unit(0.0), colors::GREEN);
        surface.blit(SpriteId(1), unit(1.0), 0.0, 1.0);
        surface.blit(SpriteId(1), unit(2.0), 0.0, 1.0);
        surface.fill_rect(unit(3.0), colors::GREEN);

        let textures: Vec<Option<SpriteId>> =
            surface.batches().iter().map(|b| b.texture).collect();
        assert_eq!(textures, vec![None, Some(SpriteId(1)), None]);
        assert_eq!(
            VertexSurface::batch_bytes(&surface.batches()[1]).len(),
            12 * Vertex::STRIDE
        );

        surface.clear();
        assert_eq!(surface.vertex_count(), 0);
    }
}
