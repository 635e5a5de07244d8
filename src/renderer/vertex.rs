//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position, texture coordinate and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, uv: [f32; 2], color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            uv,
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Named colors
pub mod colors {
    use crate::renderer::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const GREEN: Color = [0.0, 1.0, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
    pub const YELLOW: Color = [1.0, 1.0, 0.0, 1.0];
    pub const PINK: Color = [1.0, 0.75, 0.8, 1.0];
    pub const BROWN: Color = [0.65, 0.16, 0.16, 1.0];

    /// Parse a color name or `#rrggbb`
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        match s.to_lowercase().as_str() {
            "black" => Some(BACKGROUND),
            "white" => Some(WHITE),
            "green" => Some(GREEN),
            "red" => Some(RED),
            "blue" => Some(BLUE),
            "yellow" => Some(YELLOW),
            "pink" => Some(PINK),
            "brown" => Some(BROWN),
            _ => None,
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| {
            u8::from_str_radix(hex.get(i..i + 2)?, 16)
                .ok()
                .map(|v| f32::from(v) / 255.0)
        };
        Some([channel(0)?, channel(2)?, channel(4)?, 1.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(Vertex::STRIDE, 8 * 4);
        let verts = [Vertex::new(1.0, 2.0, [0.0, 1.0], colors::GREEN)];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), Vertex::STRIDE);
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(colors::parse("green"), Some(colors::GREEN));
        assert_eq!(colors::parse(" Red "), Some(colors::RED));
        assert_eq!(colors::parse("#ff0000"), Some([1.0, 0.0, 0.0, 1.0]));
        assert_eq!(colors::parse("#ff00"), None);
        assert_eq!(colors::parse("chartreuse-ish"), None);
    }
}
