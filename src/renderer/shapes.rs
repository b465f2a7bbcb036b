//! Shape generation for 2D primitives
//!
//! Everything comes out as a triangle list.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Color, Vertex};

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: Color, segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line of the given width, as one quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: Color) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Axis-aligned filled rectangle
pub fn rect(min: Vec2, max: Vec2, color: Color) -> [Vertex; 6] {
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Rectangle outline drawn outside the given bounds, `thickness` wide
pub fn rect_outline(min: Vec2, size: Vec2, thickness: f32, color: Color) -> Vec<Vertex> {
    let max = min + size;
    let t = thickness;
    let mut vertices = Vec::with_capacity(24);

    // Top and bottom span the full outer width, sides fill between them
    vertices.extend(rect(Vec2::new(min.x - t, min.y - t), Vec2::new(max.x + t, min.y), color));
    vertices.extend(rect(Vec2::new(min.x - t, max.y), Vec2::new(max.x + t, max.y + t), color));
    vertices.extend(rect(Vec2::new(min.x - t, min.y), Vec2::new(min.x, max.y), color));
    vertices.extend(rect(Vec2::new(max.x, min.y), Vec2::new(max.x + t, max.y), color));

    vertices
}
