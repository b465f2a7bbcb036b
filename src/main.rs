//! Pulse Grid entry point
//!
//! There is no windowing backend wired up yet, so the native binary plays a
//! short scripted session headlessly and logs what happens. Set RUST_LOG=debug
//! to see every placement and toggle.

use pulse_grid::platform::{Key, ScriptedInput};
use pulse_grid::renderer::VertexBatch;
use pulse_grid::sim::Flow;
use pulse_grid::{Session, Settings};

/// Seconds of play before the script quits
const DEMO_SECONDS: f32 = 8.0;

fn main() {
    env_logger::init();
    log::info!("Pulse Grid (headless) starting...");

    let settings = Settings::load();
    let dt = settings.frame_dt();

    let mut script = ScriptedInput::new();
    // Flank the node at (2,4), bump into the one at (3,3), then play
    script
        .press_keys(&[Key::Down, Key::Right, Key::Right, Key::Right, Key::Right, Key::Space])
        .press_keys(&[Key::Down, Key::Down, Key::Space])
        .press_keys(&[Key::Left, Key::Space])
        .press_keys(&[Key::Enter])
        .idle((DEMO_SECONDS / dt) as usize)
        .press_keys(&[Key::Escape]);

    let batch = VertexBatch::new(settings.quality.circle_segments());
    let mut session = Session::new(script, batch);

    // Fixed steps rather than the wall clock, so the demo runs instantly
    while session.frame(dt.min(settings.max_frame_dt)) == Flow::Continue {}

    let state = &session.state;
    log::info!(
        "Finished after {} frames: {} pulses placed, {} nodes lit, beat phase {:.3}",
        session.frames(),
        state.pulse_positions().len(),
        state.grid.active_node_count(),
        state.clock.phase()
    );
    log::info!(
        "Last frame: {} vertices ({} bytes)",
        session.surface().vertices().len(),
        session.surface().bytes().len()
    );
}
