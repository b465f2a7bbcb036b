//! Simulation step
//!
//! Advances the beat clock, updates every entity, and on the beat lights any
//! node that some recorded pulse position is close enough to.

use super::entity::Entity;
use super::state::{GameEvent, GameState};
use crate::consts::ACTIVATION_RADIUS;

/// Advance the game state by `dt` seconds. Does nothing while paused.
pub fn tick(state: &mut GameState, dt: f32) {
    debug_assert!(dt >= 0.0, "negative frame delta {dt}");
    if !state.playing {
        return;
    }

    state.clock.advance(dt);
    let phase = state.clock.phase();

    for (_, entity) in state.grid.iter_mut() {
        entity.update(dt, phase);
    }

    if state.clock.on_beat() {
        log::trace!("On beat at phase {:.3}", phase);
        activate_nodes(state);
    }
}

/// Light every unlit node within `ACTIVATION_RADIUS` of a recorded pulse
/// position. Pulse pixels are recomputed from the cell, not read from the
/// pulse entity, so expired or replaced pulses still count.
fn activate_nodes(state: &mut GameState) {
    let mut activated = Vec::new();

    // Copied out so the grid can be borrowed mutably below
    let pulses = state.pulse_positions().to_vec();
    for (pos, entity) in state.grid.iter_mut() {
        let Entity::Node(node) = entity else {
            continue;
        };
        if node.is_active() {
            continue;
        }

        let node_pos = node.position();
        let in_range = pulses
            .iter()
            .any(|p| p.to_pixel().distance(node_pos) < ACTIVATION_RADIUS);
        if in_range {
            node.activate();
            activated.push(pos);
        }
    }

    for pos in activated {
        log::info!("Node at {:?} activated", pos);
        state.push_event(GameEvent::NodeActivated(pos));
    }
}
