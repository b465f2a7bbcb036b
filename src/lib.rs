//! Pulse Grid - A rhythm puzzle on a 5x5 board
//!
//! Core modules:
//! - `sim`: Deterministic simulation (beat clock, entities, activation rule)
//! - `renderer`: Draw surface abstraction and vertex tessellation
//! - `platform`: Input events and frame timing
//! - `settings`: Runtime preferences
//! - `app`: Single-threaded frame loop tying it all together

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Session;
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Board is GRID_SIZE x GRID_SIZE cells
    pub const GRID_SIZE: usize = 5;
    /// Edge length of one cell in pixels
    pub const CELL_SIZE: f32 = 50.0;
    /// Top-left pixel of the board
    pub const GRID_ORIGIN_X: f32 = 250.0;
    pub const GRID_ORIGIN_Y: f32 = 150.0;

    /// Seconds per beat
    pub const BEAT_INTERVAL: f32 = 1.0;
    /// |sin(pi * phase)| below this counts as on-beat
    pub const ON_BEAT_THRESHOLD: f32 = 0.1;

    /// Pulses stop drawing after this many seconds
    pub const PULSE_LIFETIME: f32 = 5.0;
    /// Node lights up when a pulse position is strictly closer than this
    pub const ACTIVATION_RADIUS: f32 = CELL_SIZE;

    /// Drawn radii
    pub const NODE_RADIUS: f32 = 10.0;
    pub const PULSE_RADIUS: f32 = 15.0;
    /// Cursor outline thickness
    pub const CURSOR_THICKNESS: f32 = 2.0;

    /// Cells (row, col) holding a node after construction and every reset
    pub const NODE_SEEDS: [(usize, usize); 3] = [(1, 1), (3, 3), (2, 4)];
}

/// Pixel position of a cell's top-left corner.
///
/// Both node seeding and the activation check go through this, so the two
/// always agree on geometry.
#[inline]
pub fn cell_to_pixel(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        consts::GRID_ORIGIN_X + col as f32 * consts::CELL_SIZE,
        consts::GRID_ORIGIN_Y + row as f32 * consts::CELL_SIZE,
    )
}

/// Shared beat waveform |sin(pi * phase)|, in [0, 1]
#[inline]
pub fn beat_wave(phase: f32) -> f32 {
    (std::f32::consts::PI * phase).sin().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_pixel_node_seeds() {
        assert_eq!(cell_to_pixel(1, 1), Vec2::new(300.0, 200.0));
        assert_eq!(cell_to_pixel(3, 3), Vec2::new(400.0, 300.0));
        assert_eq!(cell_to_pixel(2, 4), Vec2::new(450.0, 250.0));
    }

    #[test]
    fn test_beat_wave_range() {
        assert!(beat_wave(0.0).abs() < 1e-6);
        assert!((beat_wave(0.5) - 1.0).abs() < 1e-6);
        assert!(beat_wave(1.0) < 1e-5);
    }
}
