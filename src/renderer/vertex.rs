//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Raw bytes for a GPU upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
    pub const GRID_LINE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const CURSOR: Color = [1.0, 1.0, 0.0, 1.0];
    pub const NODE_IDLE: Color = [1.0, 0.0, 0.0, 1.0];
    pub const NODE_ACTIVE: Color = [0.0, 1.0, 0.0, 1.0];
    pub const PULSE: Color = [0.0, 0.0, 1.0, 1.0];
}
