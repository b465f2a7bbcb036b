//! A surface that records draw calls instead of drawing

use glam::Vec2;

use super::Surface;
use super::vertex::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    RectOutline {
        min: Vec2,
        size: Vec2,
        thickness: f32,
        color: Color,
    },
}

/// Keeps the commands of the frame in progress and of the last presented one
#[derive(Debug, Default)]
pub struct DrawList {
    pending: Vec<DrawCommand>,
    presented: Vec<DrawCommand>,
    frames: u64,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.presented
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames
    }
}

impl Surface for DrawList {
    fn clear(&mut self, color: Color) {
        self.pending.clear();
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.pending.push(DrawCommand::Line { from, to, color });
    }

    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.pending.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_rect_outline(&mut self, min: Vec2, size: Vec2, thickness: f32, color: Color) {
        self.pending.push(DrawCommand::RectOutline {
            min,
            size,
            thickness,
            color,
        });
    }

    fn present(&mut self) {
        self.presented = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
