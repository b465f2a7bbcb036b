//! Tessellating surface
//!
//! Turns draw calls into a triangle list a GPU backend can upload as-is.

use glam::Vec2;

use super::Surface;
use super::shapes;
use super::vertex::{self, Color, Vertex};

/// Width of grid lines in pixels
const LINE_WIDTH: f32 = 1.0;

#[derive(Debug)]
pub struct VertexBatch {
    clear_color: Color,
    vertices: Vec<Vertex>,
    /// Last presented frame
    frame: Vec<Vertex>,
    circle_segments: u32,
    frames: u64,
}

impl VertexBatch {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            clear_color: [0.0, 0.0, 0.0, 1.0],
            vertices: Vec::new(),
            frame: Vec::new(),
            circle_segments,
            frames: 0,
        }
    }

    /// Triangle list of the most recently presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.frame
    }

    /// Same as `vertices`, as raw bytes
    pub fn bytes(&self) -> &[u8] {
        vertex::as_bytes(&self.frame)
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Surface for VertexBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.vertices.extend(shapes::line(from, to, LINE_WIDTH, color));
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, self.circle_segments));
    }

    fn draw_rect_outline(&mut self, min: Vec2, size: Vec2, thickness: f32, color: Color) {
        self.vertices
            .extend(shapes::rect_outline(min, size, thickness, color));
    }

    fn present(&mut self) {
        // Swap so the next frame reuses the old allocation
        std::mem::swap(&mut self.frame, &mut self.vertices);
        self.vertices.clear();
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::sim::GameState;

    #[test]
    fn test_batch_tessellates_a_frame() {
        let mut batch = VertexBatch::new(12);
        render(&GameState::new(), &mut batch);

        // 12 lines, one cursor outline, 3 nodes
        let expected = 12 * 6 + 24 + 3 * 12 * 3;
        assert_eq!(batch.vertices().len(), expected);
        assert_eq!(batch.bytes().len(), expected * Vertex::STRIDE);
        assert_eq!(batch.frames_presented(), 1);
    }

    #[test]
    fn test_present_replaces_previous_frame() {
        let mut batch = VertexBatch::new(8);
        render(&GameState::new(), &mut batch);
        let first = batch.vertices().len();
        render(&GameState::new(), &mut batch);
        assert_eq!(batch.vertices().len(), first);
        assert_eq!(batch.frames_presented(), 2);
    }
}
