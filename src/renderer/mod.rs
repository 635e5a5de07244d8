//! Rendering module
//!
//! Entities draw through the `Surface` capability using a per-entity
//! `RenderStrategy`. `VertexSurface` tessellates the calls into GPU-ready
//! vertex batches; `RecordingSurface` keeps them as a list.

pub mod batch;
pub mod shapes;
pub mod strategy;
pub mod surface;
pub mod vertex;

pub use batch::{Batch, VertexSurface};
pub use strategy::{DirectionalSprite, RenderInfo, RenderStrategy, SolidRect};
pub use surface::{Color, DrawCall, RecordingSurface, SpriteId, Surface};
pub use vertex::{Vertex, colors};
