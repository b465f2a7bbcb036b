//! Rendering module
//!
//! The game draws through the narrow `Surface` trait. `VertexBatch`
//! tessellates into a triangle list ready for upload; `DrawList` just
//! records the calls.

pub mod batch;
pub mod draw_list;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use draw_list::{DrawCommand, DrawList};
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Entity, GameState, Node, Pulse};

/// A display target. Primitives are in logical pixels, origin top-left.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color);
    fn draw_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Outline drawn just outside the `min`..`min + size` box
    fn draw_rect_outline(&mut self, min: Vec2, size: Vec2, thickness: f32, color: Color);
    /// Finish the frame
    fn present(&mut self);
}

/// Something that can draw itself. Must not change any state.
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface);
}

impl Draw for Node {
    fn draw(&self, surface: &mut dyn Surface) {
        let color = if self.is_active() {
            colors::NODE_ACTIVE
        } else {
            colors::NODE_IDLE
        };
        // Position is the top-left of the circle's bounding box
        let center = self.position() + Vec2::splat(NODE_RADIUS);
        surface.draw_circle(center, NODE_RADIUS, color);
    }
}

impl Draw for Pulse {
    fn draw(&self, surface: &mut dyn Surface) {
        if !self.is_active() {
            return;
        }
        // Scaled about the bounding box's top-left corner
        let radius = PULSE_RADIUS * self.scale();
        surface.draw_circle(self.position() + Vec2::splat(radius), radius, colors::PULSE);
    }
}

impl Draw for Entity {
    fn draw(&self, surface: &mut dyn Surface) {
        match self {
            Entity::Node(node) => node.draw(surface),
            Entity::Pulse(pulse) => pulse.draw(surface),
        }
    }
}

/// Draw one full frame: background, lattice, cursor, then entities.
/// Runs every frame, paused or not.
pub fn render(state: &GameState, surface: &mut dyn Surface) {
    surface.clear(colors::BACKGROUND);

    let extent = GRID_SIZE as f32 * CELL_SIZE;
    let origin = Vec2::new(GRID_ORIGIN_X, GRID_ORIGIN_Y);
    for i in 0..=GRID_SIZE {
        let offset = i as f32 * CELL_SIZE;
        surface.draw_line(
            origin + Vec2::new(0.0, offset),
            origin + Vec2::new(extent, offset),
            colors::GRID_LINE,
        );
        surface.draw_line(
            origin + Vec2::new(offset, 0.0),
            origin + Vec2::new(offset, extent),
            colors::GRID_LINE,
        );
    }

    surface.draw_rect_outline(
        state.cursor.to_pixel(),
        Vec2::splat(CELL_SIZE),
        CURSOR_THICKNESS,
        colors::CURSOR,
    );

    for (_, entity) in state.grid.iter() {
        entity.draw(surface);
    }

    surface.present();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CellPos, Direction, tick};

    fn circles(list: &DrawList) -> Vec<(Vec2, f32, Color)> {
        list.last_frame()
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => Some((center, radius, color)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_render_draws_lattice_cursor_and_nodes() {
        let state = GameState::new();
        let mut list = DrawList::new();
        render(&state, &mut list);

        let frame = list.last_frame();
        assert_eq!(frame.first(), Some(&DrawCommand::Clear(colors::BACKGROUND)));
        let lines = frame
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        assert_eq!(lines, 12);
        assert!(frame.contains(&DrawCommand::RectOutline {
            min: Vec2::new(250.0, 150.0),
            size: Vec2::splat(50.0),
            thickness: 2.0,
            color: colors::CURSOR,
        }));

        let nodes = circles(&list);
        assert_eq!(nodes.len(), 3);
        assert!(nodes.iter().all(|&(_, r, c)| r == NODE_RADIUS && c == colors::NODE_IDLE));
        assert_eq!(nodes[0].0, Vec2::new(310.0, 210.0));
        assert_eq!(list.frames_presented(), 1);
    }

    #[test]
    fn test_lattice_bounds() {
        let mut list = DrawList::new();
        render(&GameState::new(), &mut list);
        for cmd in list.last_frame() {
            if let DrawCommand::Line { from, to, .. } = *cmd {
                for p in [from, to] {
                    assert!((250.0..=500.0).contains(&p.x));
                    assert!((150.0..=400.0).contains(&p.y));
                }
            }
        }
    }

    #[test]
    fn test_cursor_follows_state() {
        let mut state = GameState::new();
        state.move_cursor(Direction::Down);
        state.move_cursor(Direction::Right);
        let mut list = DrawList::new();
        render(&state, &mut list);
        assert!(list.last_frame().iter().any(|c| matches!(
            c,
            DrawCommand::RectOutline { min, .. } if *min == CellPos::new(1, 1).to_pixel()
        )));
    }

    #[test]
    fn test_active_node_turns_green() {
        let mut state = GameState::new();
        if let Some(node) = state
            .grid
            .get_mut(CellPos::new(2, 4))
            .and_then(Entity::as_node_mut)
        {
            node.activate();
        }
        let mut list = DrawList::new();
        render(&state, &mut list);
        let greens = circles(&list)
            .iter()
            .filter(|&&(_, _, c)| c == colors::NODE_ACTIVE)
            .count();
        assert_eq!(greens, 1);
    }

    #[test]
    fn test_pulse_scales_and_disappears() {
        let mut state = GameState::new();
        state.place_pulse();
        state.toggle_play();
        tick(&mut state, 0.5);

        let mut list = DrawList::new();
        render(&state, &mut list);
        let pulse = circles(&list)
            .into_iter()
            .find(|&(_, _, c)| c == colors::PULSE)
            .unwrap();
        assert!((pulse.1 - PULSE_RADIUS * 1.5).abs() < 1e-4);

        for _ in 0..10 {
            tick(&mut state, 0.5);
        }
        render(&state, &mut list);
        assert!(circles(&list).iter().all(|&(_, _, c)| c != colors::PULSE));
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let mut state = GameState::new();
        state.place_pulse();
        let before = state.clone();
        let mut list = DrawList::new();
        render(&state, &mut list);
        assert_eq!(state, before);
    }
}
